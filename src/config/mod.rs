//! Configuration management module
//!
//! Merges command-line arguments, environment and the optional YAML
//! defaults file into one validated clone configuration

pub mod validation;
pub mod yaml;

use crate::cli::Args;
use crate::git::{Protocol, Provider, build_repo_url, resolve_output_dir};
use crate::system::System;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Provider used when neither flags nor defaults file name one
pub const DEFAULT_PROVIDER: &str = "github";
/// Protocol used when neither flags nor defaults file name one
pub const DEFAULT_PROTOCOL: &str = "ssh";
/// Branch used when neither flags nor defaults file name one
pub const DEFAULT_BRANCH: &str = "main";

/// Optional defaults read from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Fully resolved configuration for one sparse clone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneConfig {
    pub provider: Provider,
    pub host: &'static str,
    pub user: String,
    pub repo: String,
    pub protocol: Protocol,
    pub output_dir: String,
    pub branch: String,
    pub paths: Vec<String>,
}

impl CloneConfig {
    /// Build the configuration from CLI arguments and the defaults file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The defaults file cannot be found, read or parsed
    /// - The provider or protocol is unknown
    /// - A required value is empty
    #[inline]
    pub fn from_args(args: &Args, system: &dyn System) -> Result<Self> {
        let defaults = match yaml::locate_defaults_file(system, args.config.as_deref())? {
            Some(path) => yaml::load_defaults(system, &path)?,
            None => Defaults::default(),
        };

        Self::merge(args, &defaults)
    }

    /// Merge arguments over defaults and validate the result
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the merged values are invalid
    #[inline]
    pub fn merge(args: &Args, defaults: &Defaults) -> Result<Self> {
        let provider_name = args
            .provider
            .as_deref()
            .or(defaults.provider.as_deref())
            .unwrap_or(DEFAULT_PROVIDER);
        let protocol_name = args
            .protocol
            .as_deref()
            .or(defaults.protocol.as_deref())
            .unwrap_or(DEFAULT_PROTOCOL);
        let branch = args
            .checkout_branch
            .as_deref()
            .or(defaults.branch.as_deref())
            .unwrap_or(DEFAULT_BRANCH);

        let provider = provider_name.parse::<Provider>()?;
        let protocol = protocol_name.parse::<Protocol>()?;

        validation::validate_required("username", &args.username)?;
        validation::validate_required("repository", &args.repository)?;
        validation::validate_required("checkout branch", branch)?;
        validation::validate_checkout_paths(&args.checkout_paths)?;

        let output_dir = resolve_output_dir(args.output_dir.as_deref(), &args.repository);

        let config = Self {
            provider,
            host: provider.host(),
            user: args.username.clone(),
            repo: args.repository.clone(),
            protocol,
            output_dir: output_dir.to_owned(),
            branch: branch.to_owned(),
            paths: args.checkout_paths.clone(),
        };
        debug!("Resolved configuration: {:?}", config);

        Ok(config)
    }

    /// Remote URL for this configuration
    #[must_use]
    #[inline]
    pub fn repo_url(&self) -> String {
        build_repo_url(self.protocol, self.host, &self.user, &self.repo)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;
    use crate::error::SparseCloneError;
    use clap::Parser as _;

    fn args(extra: &[&str]) -> Args {
        let base = ["sparseclone", "-u", "alice", "-r", "proj", "-p", "src"];
        Args::try_parse_from(base.iter().chain(extra).copied()).unwrap()
    }

    #[test]
    fn built_in_defaults_apply() {
        let config = CloneConfig::merge(&args(&[]), &Defaults::default()).unwrap();

        assert_eq!(config.provider, Provider::GitHub);
        assert_eq!(config.host, "github.com");
        assert_eq!(config.protocol, Protocol::Ssh);
        assert_eq!(config.branch, "main");
        assert_eq!(config.output_dir, "proj");
        assert_eq!(config.repo_url(), "git@github.com:alice/proj.git");
    }

    #[test]
    fn defaults_file_fills_unset_values() {
        let defaults = Defaults {
            provider: Some("codeberg".to_owned()),
            protocol: Some("https".to_owned()),
            branch: Some("trunk".to_owned()),
        };
        let config = CloneConfig::merge(&args(&[]), &defaults).unwrap();

        assert_eq!(config.repo_url(), "https://codeberg.org/alice/proj");
        assert_eq!(config.branch, "trunk");
    }

    #[test]
    fn flags_override_defaults_file() {
        let defaults = Defaults {
            provider: Some("codeberg".to_owned()),
            protocol: Some("https".to_owned()),
            branch: Some("trunk".to_owned()),
        };
        let config = CloneConfig::merge(
            &args(&["--provider", "gitlab", "--protocol", "ssh", "-b", "dev"]),
            &defaults,
        )
        .unwrap();

        assert_eq!(config.repo_url(), "git@gitlab.com:alice/proj.git");
        assert_eq!(config.branch, "dev");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = CloneConfig::merge(&args(&["--provider", "sourceforge"]), &Defaults::default())
            .unwrap_err();
        let err = err.downcast_ref::<SparseCloneError>().unwrap();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("Unknown provider: sourceforge"));
    }

    #[test]
    fn unknown_protocol_is_rejected() {
        let err = CloneConfig::merge(&args(&["--protocol", "git"]), &Defaults::default())
            .unwrap_err();
        assert!(err.to_string().contains("Unknown protocol: git"));
    }

    #[test]
    fn dot_output_dir_means_repository_name() {
        let parsed = Args::try_parse_from([
            "sparseclone", "-u", "alice", "-r", "proj.git", "-p", "src", "-o", ".",
        ])
        .unwrap();
        let config = CloneConfig::merge(&parsed, &Defaults::default()).unwrap();
        assert_eq!(config.output_dir, "proj");
    }

    #[test]
    fn from_args_reads_defaults_from_explicit_file() {
        let system = crate::system::MockSystem::new()
            .with_file("/etc/sparseclone.yaml", b"provider: gitlab\n")
            .unwrap();
        let config = CloneConfig::from_args(
            &args(&["--config", "/etc/sparseclone.yaml"]),
            &system,
        )
        .unwrap();
        assert_eq!(config.host, "gitlab.com");
    }
}
