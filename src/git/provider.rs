//! Hosting providers and their fixed hosts

use crate::error::SparseCloneError;
use core::fmt;
use core::str::FromStr;

/// A named hosting service mapped to a fixed network host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    GitHub,
    GitLab,
    Codeberg,
}

impl Provider {
    /// Every known provider, in display order
    pub const ALL: [Self; 3] = [Self::GitHub, Self::GitLab, Self::Codeberg];

    /// Network host for this provider
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
            Self::Codeberg => "codeberg.org",
        }
    }

    /// Name accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Codeberg => "codeberg",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = SparseCloneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|provider| provider.name() == wanted)
            .ok_or_else(|| SparseCloneError::configuration(format!("Unknown provider: {s}")))
    }
}
