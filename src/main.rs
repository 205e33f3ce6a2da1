//! RaniClean site tools
//!
//! Command-line driver for locale persistence and the contact relay.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match raniclean_site::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Usage errors were already printed by clap
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {e}");
            }

            let code = e.exit_code();
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        },
    }
}
