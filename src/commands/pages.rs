//! Site map listing.

use serde::Serialize;

use crate::client::Context;
use crate::error::Result;
use crate::locale::Locale;
use crate::output::Displayable;
use crate::site::Page;

#[derive(Debug, Clone, Serialize)]
struct PageRow {
    page: Page,
    label: String,
    path: String,
    header: bool,
}

impl Displayable for PageRow {
    fn table_row(&self) -> Vec<String> {
        let header_marker = if self.header { "✓" } else { "" };
        vec![self.label.clone(), self.path.clone(), header_marker.to_string()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["PAGE", "PATH", "NAV"]
    }
}

/// List every page with its localized label and path.
pub async fn pages(ctx: &Context, locale: Option<Locale>) -> Result<()> {
    let locale = locale.unwrap_or(ctx.locale);

    let rows: Vec<PageRow> = Page::ALL
        .into_iter()
        .map(|page| PageRow {
            page,
            label: page.label(locale),
            path: page.href(locale),
            header: page.in_header(),
        })
        .collect();

    ctx.output.table(&rows)?;

    if ctx.output.is_text() {
        let (label, href) = Page::book_now(locale);
        ctx.output.line(&format!("\n{label}: {href}"));
    }
    Ok(())
}
