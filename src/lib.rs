//! `sparseclone` - Clone a git repository with sparse checkout in one step
//!
//! This library builds the remote URL for a hosted repository and runs the
//! fixed git sequence: clone without checkout, cone-mode sparse checkout
//! init, sparse checkout set, and branch checkout.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use config::CloneConfig;
use operations::{OutputFormat, SparseCloneOperation};
use system::{RealSystem, System};
use tracing::debug;

/// Main entry point for the sparseclone library
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem;
    run_with_system(args, &system)
}

/// Run against an explicit system, printing the plan instead on `--dry-run`
pub fn run_with_system(args: &Args, system: &dyn System) -> Result<()> {
    let config = CloneConfig::from_args(args, system)?;
    let operation = SparseCloneOperation::new(config, system);

    if args.dry_run {
        let format = args.output_format.parse::<OutputFormat>()?;
        // Output to stdout (not using logging)
        println!("{}", operation.plan().render(format)?);
        return Ok(());
    }

    let stage = operation.execute()?;
    debug!("Finished at stage {:?}", stage);
    Ok(())
}
