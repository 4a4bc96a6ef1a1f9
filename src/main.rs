//! Intermine-boot CLI - InterMine source build automation
//!
//! Entry point for the intermine-boot command-line application.

use anyhow::Result;
use clap::Parser;

use intermine_boot::cli::output::display_error;
use intermine_boot::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level(cli.verbose).into()),
        )
        .init();

    // Run the build and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}

/// Map `-v` occurrences to the default tracing level
fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}
