//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`]
//! module.

pub mod output;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults::{DEFAULT_BRANCH, DEFAULT_REPO};
use crate::core::pipeline;
use output::ConsoleReporter;

/// Intermine-boot - build the InterMine suite from source
///
/// Clones InterMine at a branch, builds its Gradle modules in order,
/// and reports the core and bio versions.
#[derive(Parser, Debug)]
#[command(name = "intermine-boot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository to build (URL or local path)
    #[arg(long, default_value = DEFAULT_REPO)]
    pub repo: String,

    /// Branch to build
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status lines and progress bars
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the build result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Execute the build described by the parsed arguments
    pub async fn run(self) -> Result<()> {
        if !self.quiet {
            println!("Cloning GitHub repository for building InterMine");
        }

        let mut reporter = ConsoleReporter::new(self.quiet);
        let outcome = pipeline::run(&self.repo, &self.branch, &mut reporter)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else if !self.quiet {
            println!(
                "{} Built InterMine {} (bio {})",
                output::status::SUCCESS,
                outcome.im_version,
                outcome.bio_version
            );
        }

        Ok(())
    }
}
