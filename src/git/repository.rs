//! Remote repository URL construction

use crate::error::SparseCloneError;
use core::fmt;
use core::str::FromStr;

const GIT_SUFFIX: &str = ".git";

/// Transfer protocol used for the clone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Ssh,
    Https,
}

impl Protocol {
    /// Name accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ssh => "ssh",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protocol {
    type Err = SparseCloneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ssh" => Ok(Self::Ssh),
            "https" => Ok(Self::Https),
            other => Err(SparseCloneError::configuration(format!(
                "Unknown protocol: {other}"
            ))),
        }
    }
}

/// Build the remote URL for `user/repo` on `host`
///
/// ssh URLs always end in `.git`; https URLs keep the repository name as given.
#[must_use]
pub fn build_repo_url(protocol: Protocol, host: &str, user: &str, repo: &str) -> String {
    match protocol {
        Protocol::Ssh => {
            if repo.ends_with(GIT_SUFFIX) {
                format!("git@{host}:{user}/{repo}")
            } else {
                format!("git@{host}:{user}/{repo}{GIT_SUFFIX}")
            }
        }
        Protocol::Https => format!("https://{host}/{user}/{repo}"),
    }
}

/// Directory the clone lands in when none (or `.`) was requested
#[must_use]
pub fn default_output_dir(repo: &str) -> &str {
    repo.strip_suffix(GIT_SUFFIX).unwrap_or(repo)
}

/// Resolve the requested output directory against the repository name
#[must_use]
pub fn resolve_output_dir<'a>(requested: Option<&'a str>, repo: &'a str) -> &'a str {
    match requested {
        None | Some("" | ".") => default_output_dir(repo),
        Some(dir) => dir,
    }
}
