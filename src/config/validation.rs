//! Configuration validation logic

use crate::error::SparseCloneError;
use anyhow::Result;

/// Validate that a required value is not blank
///
/// # Errors
///
/// Returns a configuration error naming `field` if `value` is blank
#[inline]
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SparseCloneError::configuration(format!("{field} cannot be empty")).into());
    }
    Ok(())
}

/// Validate the sparse checkout paths
///
/// Paths are otherwise passed to git verbatim.
///
/// # Errors
///
/// Returns a configuration error if:
/// - No path was given
/// - A path is blank
#[inline]
pub fn validate_checkout_paths(paths: &[String]) -> Result<()> {
    if paths.is_empty() {
        return Err(
            SparseCloneError::configuration("At least one checkout path is required").into(),
        );
    }

    for (index, path) in paths.iter().enumerate() {
        if path.trim().is_empty() {
            return Err(SparseCloneError::configuration(format!(
                "Checkout path #{} cannot be empty",
                index + 1
            ))
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    #[test]
    fn blank_required_values_are_rejected() {
        validate_required("username", "alice").unwrap();
        let err = validate_required("username", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: username cannot be empty");
    }

    #[test]
    fn checkout_paths_must_be_present_and_non_blank() {
        validate_checkout_paths(&["src".to_owned(), "docs/api".to_owned()]).unwrap();
        validate_checkout_paths(&[]).unwrap_err();

        let err = validate_checkout_paths(&["src".to_owned(), String::new()]).unwrap_err();
        assert!(err.to_string().contains("Checkout path #2"));
    }
}
