//! Resolution of where the CLI reads landmarks from.

use camino::{Utf8Path, Utf8PathBuf};
use explorer_core::Catalog;
use explorer_data::{bundled_catalog, load_dataset_dir};
use log::debug;

use crate::{ARG_DATA_DIR, CliError};

/// Landmark source selected by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatasetSource {
    /// The Albany and Troy files compiled into `explorer-data`.
    Bundled,
    /// A directory of `*.json` city files.
    Directory(Utf8PathBuf),
}

impl DatasetSource {
    pub(crate) fn from_option(data_dir: Option<Utf8PathBuf>) -> Self {
        data_dir.map_or(Self::Bundled, Self::Directory)
    }

    /// Check that a configured directory exists before loading from it.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Bundled => Ok(()),
            Self::Directory(path) => require_directory(path),
        }
    }

    pub(crate) fn load(&self) -> Result<Catalog, CliError> {
        let catalog = match self {
            Self::Bundled => bundled_catalog()?,
            Self::Directory(path) => load_dataset_dir(path)?,
        };
        debug!("dataset {self:?} yielded {} landmarks", catalog.len());
        Ok(catalog)
    }
}

fn require_directory(path: &Utf8Path) -> Result<(), CliError> {
    match explorer_fs::dir_is_dir(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::DataDirNotDirectory {
            field: ARG_DATA_DIR,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingDataDir {
                field: ARG_DATA_DIR,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectDataDir {
            field: ARG_DATA_DIR,
            path: path.to_path_buf(),
            source,
        }),
    }
}
