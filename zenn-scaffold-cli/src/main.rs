//! zenn-scaffold - article scaffolding command-line interface.
//!
//! Commands:
//! - `zenn-scaffold new`: Create a new article from the questionnaire
//! - `zenn-scaffold doctor`: Diagnose scaffold configuration and setup

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zenn_scaffold_cli::{doctor, new};
use zenn_scaffold_cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("zenn_scaffold=debug,zenn_scaffold_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::New(args) => result_to_exit(new::run_new(args)),
        Commands::Doctor { verbose } => doctor::run_doctor(verbose),
    };
    std::process::exit(exit_code);
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
