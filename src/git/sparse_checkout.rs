//! Git sparse checkout step descriptions and execution

use crate::error::SparseCloneError;
use crate::system::System;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Name of the version-control executable
pub const GIT: &str = "git";

/// One external git invocation, described but not yet run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct GitStep {
    /// Human-readable step name used in error messages
    pub name: &'static str,
    pub program: &'static str,
    pub args: Vec<String>,
}

impl GitStep {
    fn new<I, S>(name: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            program: GIT,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `git clone --no-checkout <url> <output-dir>`
    #[must_use]
    pub fn clone_no_checkout(url: &str, output_dir: &str) -> Self {
        Self::new("git clone", ["clone", "--no-checkout", url, output_dir])
    }

    /// `git sparse-checkout init --cone`
    #[must_use]
    pub fn sparse_init_cone() -> Self {
        Self::new("git sparse-checkout init", ["sparse-checkout", "init", "--cone"])
    }

    /// `git sparse-checkout set <path>...`
    #[must_use]
    pub fn sparse_set(paths: &[String]) -> Self {
        let args = ["sparse-checkout", "set"]
            .into_iter()
            .map(str::to_owned)
            .chain(paths.iter().cloned());
        Self::new("git sparse-checkout set", args)
    }

    /// `git checkout <branch>`
    #[must_use]
    pub fn checkout(branch: &str) -> Self {
        Self::new("git checkout", ["checkout", branch])
    }
}

/// Check that git resolves on the search path
///
/// # Errors
///
/// Returns an environment error if git cannot be found
#[inline]
pub fn check_git_availability(system: &dyn System) -> Result<PathBuf> {
    let path = system.which(GIT).ok_or_else(|| {
        return SparseCloneError::environment("git is not installed or not in PATH");
    })?;
    debug!("Found git at {}", path.display());
    Ok(path)
}

/// Run a step in the current directory and fail unless it exits successfully
///
/// # Errors
///
/// Returns a git error naming the step if the process cannot be started
/// or exits with a non-zero status
#[inline]
pub fn run_step(system: &dyn System, step: &GitStep) -> Result<()> {
    debug!("Running {}: {} {:?}", step.name, step.program, step.args);

    let status = system
        .run_command(step.program, &step.args)
        .map_err(|e| {
            let message = format!("could not start {}: {e}", step.program);
            return SparseCloneError::git(step.name, message);
        })?;

    if !status.success() {
        debug!("{} exited with {}", step.name, status);
        return Err(SparseCloneError::git(step.name, status.to_string()).into());
    }

    debug!("{} succeeded", step.name);
    Ok(())
}
