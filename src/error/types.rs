//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for sparseclone operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SparseCloneError {
    /// Configuration Error - unknown provider, unknown protocol or invalid input
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Environment Error - required tooling is missing
    #[error("Environment error: {message}")]
    Environment { message: String },

    /// Git Error - a git sub-operation failed
    #[error("{step} failed: {message}")]
    Git { step: String, message: String },

    /// Filesystem Error - output directory cannot be resolved or entered
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl SparseCloneError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Git { .. } => 3,
            Self::Filesystem { .. } => 4,
            Self::Environment { .. } => 5,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an environment error
    #[inline]
    pub fn environment<S: Into<String>>(message: S) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    /// Create a git error for the named step
    #[inline]
    pub fn git<S: Into<String>, M: Into<String>>(step: S, message: M) -> Self {
        Self::Git {
            step: step.into(),
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_category() {
        // 2 is left to clap usage errors
        assert_eq!(SparseCloneError::configuration("x").exit_code(), 1);
        assert_eq!(SparseCloneError::environment("x").exit_code(), 5);
        assert_eq!(SparseCloneError::git("git clone", "x").exit_code(), 3);
        assert_eq!(SparseCloneError::filesystem("x").exit_code(), 4);
    }

    #[test]
    fn git_error_names_the_step() {
        let err = SparseCloneError::git("git sparse-checkout init", "exit status 128");
        assert_eq!(
            err.to_string(),
            "git sparse-checkout init failed: exit status 128"
        );
    }
}
