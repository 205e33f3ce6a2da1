//! Page visits and language switches against file-backed storage.
//!
//! One invocation is one event on one tab: `visit` mounts a page, `switch`
//! clicks the language button and, unless told otherwise, mounts the page it
//! lands on.

use serde::Serialize;

use crate::client::Context;
use crate::error::Result;
use crate::locale::Locale;
use crate::navigation::{LanguageSwitcher, LocalePersist, MountOutcome, Router, SimulatedRouter, SwitchOutcome};
use crate::site::Page;
use crate::t;

#[derive(Serialize)]
struct VisitReport<'a> {
    tab: &'a str,
    requested: &'a str,
    #[serde(flatten)]
    outcome: MountOutcome,
    path: String,
}

#[derive(Serialize)]
struct SwitchReport<'a> {
    tab: &'a str,
    switch: SwitchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    mount: Option<MountOutcome>,
    path: String,
}

/// Status line for a mount outcome.
fn describe(outcome: &MountOutcome, locale: Locale) -> String {
    match outcome {
        MountOutcome::AlreadyChecked => t!(locale, "msg-already-checked"),
        MountOutcome::SwitchConfirmed { locale: confirmed } => {
            t!(locale, "msg-switch-confirmed", "locale" => confirmed.as_str())
        },
        MountOutcome::Redirected { to, path, .. } => {
            t!(locale, "msg-redirected", "locale" => to.as_str(), "path" => path.as_str())
        },
        MountOutcome::PreferenceSaved { locale: saved } => {
            t!(locale, "msg-preference-saved", "locale" => saved.as_str())
        },
        MountOutcome::NotSaved { locale: unsaved } => {
            t!(locale, "msg-not-saved", "locale" => unsaved.as_str())
        },
        MountOutcome::Unchanged { locale: current } => {
            t!(locale, "msg-unchanged", "locale" => current.as_str())
        },
    }
}

fn report(ctx: &Context, outcome: &MountOutcome) {
    let message = describe(outcome, ctx.locale);
    if matches!(outcome, MountOutcome::NotSaved { .. }) {
        ctx.output.warn(&message);
    } else {
        ctx.output.success(&message);
    }
}

fn warn_unknown_page(ctx: &Context, path: &str) {
    if Page::from_path(path).is_none() {
        ctx.output.warn(&t!(ctx.locale, "msg-unknown-page", "path" => path));
    }
}

/// Load `path` on `tab`.
pub async fn visit(ctx: &Context, path: &str, tab: &str) -> Result<()> {
    let mut router = SimulatedRouter::open(path)?;
    let mut storage = ctx.tab_storage(tab)?;
    warn_unknown_page(ctx, path);

    let outcome = LocalePersist::new().on_mount(&mut router, &mut storage);

    if ctx.output.is_text() {
        report(ctx, &outcome);
        ctx.output.line(router.pathname());
        return Ok(());
    }

    ctx.output.value(&VisitReport {
        tab,
        requested: path,
        outcome,
        path: router.pathname().to_string(),
    })
}

/// Click the language switch on `path` in `tab`.
pub async fn switch(ctx: &Context, path: &str, tab: &str, no_follow: bool) -> Result<()> {
    let mut router = SimulatedRouter::open(path)?;
    let mut storage = ctx.tab_storage(tab)?;
    warn_unknown_page(ctx, path);

    let switch = LanguageSwitcher.toggle(&mut router, &mut storage);
    ctx.output.info(&t!(
        ctx.locale,
        "msg-switching",
        "from" => switch.from.as_str(),
        "to" => switch.to.as_str(),
        "path" => switch.path.as_str(),
    ));

    // The navigation loads a new page, which mounts its own resolver
    let mount = (!no_follow).then(|| LocalePersist::new().on_mount(&mut router, &mut storage));

    if ctx.output.is_text() {
        if let Some(mount) = &mount {
            report(ctx, mount);
        }
        ctx.output.line(router.pathname());
        return Ok(());
    }

    ctx.output.value(&SwitchReport { tab, switch, mount, path: router.pathname().to_string() })
}
