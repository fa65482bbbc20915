//! YAML defaults file loading

use crate::config::Defaults;
use crate::error::SparseCloneError;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Defaults file looked up in the current directory
pub const LOCAL_DEFAULTS_FILE: &str = "sparseclone.yaml";

/// Find the defaults file to use, if any
///
/// An explicit path must exist. Otherwise `./sparseclone.yaml` is preferred
/// over `<config dir>/sparseclone/config.yaml`, and a missing file is not an error.
///
/// # Errors
///
/// Returns a configuration error if an explicit path does not exist
#[inline]
pub fn locate_defaults_file(
    system: &dyn System,
    explicit: Option<&str>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = PathBuf::from(path);
        if !system.exists(&path) {
            return Err(SparseCloneError::configuration(format!(
                "Configuration file not found: {}",
                path.display()
            ))
            .into());
        }
        return Ok(Some(path));
    }

    let local = PathBuf::from(LOCAL_DEFAULTS_FILE);
    if system.exists(&local) {
        return Ok(Some(local));
    }

    let user_file = system
        .config_dir()
        .map(|dir| dir.join("sparseclone").join("config.yaml"));
    Ok(user_file.filter(|path| system.exists(path)))
}

/// Load and parse the YAML defaults file
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed
#[inline]
pub fn load_defaults(system: &dyn System, path: &Path) -> Result<Defaults> {
    debug!("Loading defaults from {}", path.display());

    let content = system.read_to_string(path).map_err(|e| {
        return SparseCloneError::configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ));
    })?;

    parse_defaults(&content)
}

/// Parse YAML defaults; an empty document yields no defaults
///
/// # Errors
///
/// Returns a configuration error on invalid YAML or unknown keys
#[inline]
pub fn parse_defaults(content: &str) -> Result<Defaults> {
    if content.trim().is_empty() {
        return Ok(Defaults::default());
    }

    let defaults = serde_yaml::from_str(content)
        .map_err(|e| SparseCloneError::configuration(format!("Failed to parse YAML: {e}")))?;
    Ok(defaults)
}
