//! Content file loading.
//!
//! The built-in profile can be replaced by a TOML file passed via
//! `--content`. Unlike the config file, a content path is always
//! explicit, so a missing file is an error rather than a fallback.

use crate::model::profile::Profile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("Failed to read content file at {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content file is not valid TOML for a `Profile`.
    #[error("Invalid content in {path:?}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The profile parsed but is unusable.
    #[error("Content in {path:?} is incomplete: {reason}")]
    Invalid {
        /// Path with incomplete content.
        path: PathBuf,
        /// What is missing.
        reason: String,
    },
}

/// Load a profile from a TOML file.
///
/// The file must contain a complete [`Profile`]; there is no merging
/// with the built-in content.
pub fn load_profile(path: &Path) -> Result<Profile, ContentError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let profile: Profile = toml::from_str(&contents).map_err(|e| ContentError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if profile.owner.trim().is_empty() {
        return Err(ContentError::Invalid {
            path: path.to_path_buf(),
            reason: "owner must not be empty".to_string(),
        });
    }

    Ok(profile)
}
