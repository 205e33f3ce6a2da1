//! RaniClean Site Core
//!
//! The logic behind the bilingual (English/German) RaniClean website that is
//! not page markup: keeping the visitor on their preferred language across
//! page loads, the header language switch, and the contact form that is
//! relayed through EmailJS.
//!
//! ## Locale persistence
//!
//! Every page path starts with `/en` or `/de`. On each page mount a
//! [`LocalePersist`](navigation::LocalePersist) compares that locale with the
//! preference saved in durable storage and redirects once on mismatch. The
//! [`LanguageSwitcher`](navigation::LanguageSwitcher) sets a one-shot marker
//! in session storage before it navigates so the next mount does not undo
//! the switch.
//!
//! ```rust
//! use raniclean_site::navigation::{LanguageSwitcher, LocalePersist, Router, SimulatedRouter};
//! use raniclean_site::storage::{MemoryStore, SiteStorage};
//!
//! let mut storage = SiteStorage::new(MemoryStore::new(), MemoryStore::new());
//! let mut router = SimulatedRouter::open("/en/about")?;
//!
//! LanguageSwitcher.toggle(&mut router, &mut storage);
//! LocalePersist::new().on_mount(&mut router, &mut storage);
//!
//! assert_eq!(router.pathname(), "/de/about");
//! # Ok::<(), raniclean_site::Error>(())
//! ```
//!
//! ## Command line
//!
//! The `raniclean` binary drives the same code against file-backed storage:
//!
//! ```bash
//! raniclean visit /en/services        # Load a page
//! raniclean switch /en/about          # Click the language switch
//! raniclean contact --name Anna --email anna@example.de --service office \
//!     --message "Weekly office cleaning, please."
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod navigation;
pub mod output;
pub mod site;
pub mod storage;

pub use cli::Cli;
pub use error::{Error, Result};

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the binary, parsing arguments and
/// dispatching to the appropriate command handler.
pub async fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::Usage),
            }
        },
    };

    if cli_args.debug {
        init_logging();
    }

    let ctx = client::Context::new(
        cli_args.state_dir,
        &cli_args.output,
        &cli_args.color,
        cli_args.quiet,
    )?;

    commands::execute(&ctx, &cli_args.command).await
}

/// Initialize tracing/logging for debug mode.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("raniclean_site=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
