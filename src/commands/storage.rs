//! Inspection and reset of the simulated browser storage.

use serde::Serialize;

use crate::client::Context;
use crate::error::Result;
use crate::storage::TabState;
use crate::t;

#[derive(Serialize)]
struct StorageReport<'a> {
    tab: &'a str,
    preferred_locale: Option<String>,
    state: TabState,
    draft_pending: bool,
}

/// Show the saved locale, the tab state and whether a draft is waiting.
pub async fn show(ctx: &Context, tab: &str) -> Result<()> {
    let storage = ctx.tab_storage(tab)?;

    let report = StorageReport {
        tab,
        preferred_locale: storage.stored_preference(),
        state: storage.tab_state(),
        draft_pending: ctx.drafts().load()?.is_some(),
    };

    if ctx.output.is_text() {
        ctx.output.line(&format!("tab:              {}", report.tab));
        ctx.output.line(&format!(
            "preferred locale: {}",
            report.preferred_locale.as_deref().unwrap_or("-")
        ));
        let state = match report.state {
            TabState::Idle => "idle",
            TabState::SwitchRequested => "switch requested",
        };
        ctx.output.line(&format!("state:            {state}"));
        ctx.output.line(&format!("contact draft:    {}", if report.draft_pending { "yes" } else { "no" }));
        return Ok(());
    }

    ctx.output.value(&report)
}

/// Clear one tab's session, or everything.
pub async fn clear(ctx: &Context, tab: &str, all: bool) -> Result<()> {
    let mut storage = ctx.tab_storage(tab)?;
    storage.clear_session()?;

    if all {
        storage.forget_preference()?;
        match std::fs::remove_dir_all(ctx.sessions_dir()) {
            Ok(()) => {},
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
            Err(e) => return Err(e.into()),
        }
        ctx.drafts().clear()?;
    }

    ctx.output.success(&t!(ctx.locale, "msg-storage-cleared"));
    Ok(())
}
