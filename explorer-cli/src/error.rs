//! Error types emitted by the explorer CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use explorer_data::DatasetError;
use thiserror::Error;

/// Errors emitted by the explorer CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The configured dataset directory does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingDataDir {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The configured dataset path exists but is not a directory.
    #[error("{field} path {path:?} exists but is not a directory")]
    DataDirNotDirectory {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The configured dataset path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectDataDir {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the landmark dataset failed.
    #[error("failed to load landmarks: {0}")]
    Dataset(#[from] DatasetError),
    /// The `--select` id names no landmark in the catalog.
    #[error("no landmark has id {id:?}")]
    UnknownLandmark { id: String },
    /// The `--select` id names a landmark the active filters hide.
    #[error("landmark {id:?} is hidden by the active filters and cannot be selected")]
    HiddenLandmark { id: String },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
