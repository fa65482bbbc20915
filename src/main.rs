//! # `sparseclone`
//!
//! Clone a git repository from GitHub, GitLab or Codeberg and check out only
//! the directories you need, in one step.
//!
//! ## Usage
//!
//! ```sh
//! sparseclone -u alice -r proj -p src -p docs
//! sparseclone --provider gitlab --protocol https -u bob -r tool -b dev -p lib
//! ```
//!
//! See `sparseclone --help` for more options.

use clap::Parser as _;
use sparseclone::cli::Args;
use sparseclone::error::SparseCloneError;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match sparseclone::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            // Reported even when RUST_LOG filters out every event
            eprintln!("Error: {err}");
            std::process::exit(
                err.downcast_ref::<SparseCloneError>()
                    .map_or(1, SparseCloneError::exit_code),
            );
        }
    }
}
