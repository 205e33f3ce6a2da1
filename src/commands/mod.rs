//! Command implementations.
//!
//! Each submodule implements a group of related commands.

mod contact;
mod navigation;
mod pages;
mod storage;

pub use contact::contact;
pub use navigation::{switch, visit};
pub use pages::pages;

use crate::cli::{Commands, StorageCommands};
use crate::client::Context;
use crate::error::Result;

/// Execute a command.
pub async fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        // Locale persistence
        Commands::Visit { path, tab } => visit(ctx, path, tab).await,
        Commands::Switch { path, tab, no_follow } => switch(ctx, path, tab, *no_follow).await,

        // Site
        Commands::Pages { locale } => pages(ctx, locale.map(Into::into)).await,
        Commands::Contact(args) => contact(ctx, args).await,

        // Storage
        Commands::Storage(sub) => match sub {
            StorageCommands::Show { tab } => storage::show(ctx, tab).await,
            StorageCommands::Clear { tab, all } => storage::clear(ctx, tab, *all).await,
        },

        // Utility
        Commands::Cheatsheet => cheatsheet(ctx).await,
        Commands::Completion { shell } => completion(ctx, shell).await,
    }
}

async fn cheatsheet(_ctx: &Context) -> Result<()> {
    println!("RaniClean Site Cheatsheet");
    println!("=========================");
    println!();
    println!("Locale persistence:");
    println!("  raniclean visit /en/services          # Load a page, reconcile its locale");
    println!("  raniclean switch /en/about            # Click the language switch");
    println!("  raniclean switch /en/about --no-follow");
    println!("  raniclean visit /de --tab second      # Another browser tab");
    println!();
    println!("Contact form:");
    println!("  raniclean contact --name Anna --email anna@example.de \\");
    println!("      --service office --message \"Weekly office cleaning, please.\"");
    println!("  raniclean contact --retry             # Resend after a failure");
    println!();
    println!("Storage:");
    println!("  raniclean storage show");
    println!("  raniclean storage clear --all");
    println!();
    println!("For more: raniclean --help");
    Ok(())
}

async fn completion(_ctx: &Context, shell: &crate::cli::Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Generator, generate};

    let mut cmd = crate::cli::Cli::command();

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        let name = cmd.get_name().to_string();
        generate(generator, cmd, name, &mut std::io::stdout());
    }

    match shell {
        crate::cli::Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        crate::cli::Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        crate::cli::Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        crate::cli::Shell::PowerShell => {
            print_completions(clap_complete::shells::PowerShell, &mut cmd);
        },
    }

    Ok(())
}
