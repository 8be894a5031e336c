//! Error type shared by the document loader, the generation pipeline and the CLI.
//!
//! Rendering itself never fails: malformed expression nodes turn into a placeholder
//! (see [`crate::symbolic::expr_tree::Node::Unknown`]). Everything around it, i.e.
//! reading files, parsing generator output and writing results, reports through [`PdeError`].

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PdeError>;

#[derive(Debug, Error)]
pub enum PdeError {
    /// referenced file or directory does not exist
    #[error("'{}' does not exist", path.display())]
    MissingInput { path: PathBuf },

    /// the JSON is not shaped like a PDE document, or required keys are missing
    #[error("malformed document '{source_name}': {reason}")]
    MalformedDocument { source_name: String, reason: String },

    /// the generator returned text that is not JSON even after stripping code fences
    #[error("generator did not return valid JSON for '{name}'. Raw content:\n{raw}")]
    UpstreamFormat { name: String, raw: String },

    #[error("generator failed for '{name}': {message}")]
    Generator { name: String, message: String },

    #[error("loglevel must be off, none, debug, info, warn or error, got '{0}'")]
    InvalidLogLevel(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl PdeError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        PdeError::MissingInput { path: path.into() }
    }

    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        PdeError::MalformedDocument {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
