//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::locale::Locale;

/// Default tab name for the simulated browser session.
pub const DEFAULT_TAB: &str = "main";

/// RaniClean site tools - locale persistence and contact relay
#[derive(Parser, Debug)]
#[command(name = "raniclean")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_parser = ["table", "json", "yaml", "jsonl"])]
    pub output: String,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"])]
    pub color: String,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory holding simulated browser storage and contact drafts
    #[arg(long, global = true, env = "RANICLEAN_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a page: reconcile its locale with the saved preference
    Visit {
        /// Page path, e.g. /en/services
        path: String,

        /// Browser tab the page is loaded in
        #[arg(long, default_value = DEFAULT_TAB)]
        tab: String,
    },

    /// Click the language switch on a page
    Switch {
        /// Page path the switch is clicked on, e.g. /en/about
        path: String,

        /// Browser tab the page is loaded in
        #[arg(long, default_value = DEFAULT_TAB)]
        tab: String,

        /// Stop after navigating; do not load the target page
        #[arg(long)]
        no_follow: bool,
    },

    /// List the site's pages in a locale
    Pages {
        /// Locale to list (defaults to the display locale)
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Send a contact request through the email relay
    Contact(ContactArgs),

    /// Inspect or clear simulated browser storage
    #[command(subcommand)]
    Storage(StorageCommands),

    /// Show quick reference card
    Cheatsheet,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Contact form fields.
#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Your name
    #[arg(long, required_unless_present = "retry")]
    pub name: Option<String>,

    /// Reply email address
    #[arg(long, required_unless_present = "retry")]
    pub email: Option<String>,

    /// Phone number (optional)
    #[arg(long)]
    pub phone: Option<String>,

    /// Requested service: home, office or deep
    #[arg(long, required_unless_present = "retry")]
    pub service: Option<String>,

    /// Message (at least 10 characters)
    #[arg(long, required_unless_present = "retry")]
    pub message: Option<String>,

    /// Locale of the page the form is submitted from
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Validate only; do not send
    #[arg(long)]
    pub dry_run: bool,

    /// Resend the request saved after a failed attempt
    #[arg(long, conflicts_with_all = ["name", "email", "phone", "service", "message"])]
    pub retry: bool,
}

/// Storage commands.
#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// Show the saved locale and the tab's redirect marker
    Show {
        /// Browser tab to inspect
        #[arg(long, default_value = DEFAULT_TAB)]
        tab: String,
    },

    /// Clear the tab's session storage, or everything with --all
    Clear {
        /// Browser tab to clear
        #[arg(long, default_value = DEFAULT_TAB)]
        tab: String,

        /// Also clear the saved locale, every tab and the contact draft
        #[arg(long)]
        all: bool,
    },
}

/// Locale values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// English.
    En,
    /// German.
    De,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Self::En,
            LocaleArg::De => Self::De,
        }
    }
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_switch() {
        let cli = Cli::try_parse_from(["raniclean", "switch", "/en/about", "--tab", "t2", "--no-follow"]).unwrap();
        match cli.command {
            Commands::Switch { path, tab, no_follow } => {
                assert_eq!(path, "/en/about");
                assert_eq!(tab, "t2");
                assert!(no_follow);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_contact_requires_fields_unless_retry() {
        assert!(Cli::try_parse_from(["raniclean", "contact", "--name", "Jo"]).is_err());
        assert!(Cli::try_parse_from(["raniclean", "contact", "--retry"]).is_ok());
        assert!(Cli::try_parse_from(["raniclean", "contact", "--retry", "--name", "Jo"]).is_err());
    }

    #[test]
    fn test_locale_arg() {
        let cli = Cli::try_parse_from(["raniclean", "pages", "--locale", "de"]).unwrap();
        match cli.command {
            Commands::Pages { locale } => assert_eq!(locale.map(Locale::from), Some(Locale::De)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
