//! Sparse clone operation coordination

use crate::config::CloneConfig;
use crate::error::SparseCloneError;
use crate::git::{GitStep, check_git_availability, run_step};
use crate::operations::plan::SparseClonePlan;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Progress through the sparse clone sequence
///
/// Each stage is only reached after every earlier one succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NotStarted,
    GitChecked,
    Cloned,
    DirEntered,
    SparseInit,
    SparseSet,
    CheckedOut,
}

/// Coordinates the complete sparse clone
#[non_exhaustive]
pub struct SparseCloneOperation<'src> {
    config: CloneConfig,
    system: &'src dyn System,
}

impl<'src> SparseCloneOperation<'src> {
    /// Create a new operation from a resolved configuration
    #[must_use]
    #[inline]
    pub fn new(config: CloneConfig, system: &'src dyn System) -> Self {
        Self { config, system }
    }

    /// Describe the git invocations this operation will run
    #[must_use]
    #[inline]
    pub fn plan(&self) -> SparseClonePlan {
        SparseClonePlan::from_config(&self.config)
    }

    /// Run the full sequence, stopping at the first failure
    ///
    /// A partially cloned directory is left in place on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - git is not on the search path
    /// - Any git invocation fails
    /// - The output directory is missing after clone or cannot be entered
    #[inline]
    pub fn execute(&self) -> Result<Stage> {
        let mut stage = Stage::NotStarted;
        let plan = self.plan();
        let [clone, sparse_init, sparse_set, checkout] = &plan.steps;

        check_git_availability(self.system)?;
        advance(&mut stage, Stage::GitChecked);

        println!("Cloning from {}...", plan.url);
        run_step(self.system, clone)?;
        advance(&mut stage, Stage::Cloned);

        let entered = self.enter_output_dir()?;
        info!("Entered {}", entered.display());
        advance(&mut stage, Stage::DirEntered);

        run_step(self.system, sparse_init)?;
        advance(&mut stage, Stage::SparseInit);

        run_step(self.system, sparse_set)?;
        advance(&mut stage, Stage::SparseSet);

        run_step(self.system, checkout)?;
        advance(&mut stage, Stage::CheckedOut);

        println!("Sparse clone complete!");
        Ok(stage)
    }

    /// Resolve the output directory and make it the working directory
    fn enter_output_dir(&self) -> Result<PathBuf> {
        let absolute = self
            .system
            .absolute(Path::new(&self.config.output_dir))
            .map_err(|e| {
                return SparseCloneError::filesystem(format!(
                    "Could not get absolute path for '{}': {e}",
                    self.config.output_dir
                ));
            })?;

        if !self.system.exists(&absolute) {
            return Err(SparseCloneError::filesystem(format!(
                "Output directory does not exist: {}",
                absolute.display()
            ))
            .into());
        }

        self.system.set_current_dir(&absolute).map_err(|e| {
            return SparseCloneError::filesystem(format!(
                "Could not enter output dir {}: {e}",
                absolute.display()
            ));
        })?;

        Ok(absolute)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug_assert!(next > *stage, "stages only move forward");
    debug!("Stage {:?} -> {:?}", stage, next);
    *stage = next;
}

/// Build the steps for a configuration, in execution order
#[must_use]
#[inline]
pub fn build_steps(config: &CloneConfig) -> [GitStep; 4] {
    [
        GitStep::clone_no_checkout(&config.repo_url(), &config.output_dir),
        GitStep::sparse_init_cone(),
        GitStep::sparse_set(&config.paths),
        GitStep::checkout(&config.branch),
    ]
}
