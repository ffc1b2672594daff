//! Assembly of a [`Catalog`] from city files on disk or compiled-in data.

use std::collections::HashMap;
use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use explorer_core::{Catalog, CatalogError};
use explorer_fs::{json_files_in_dir, open_utf8_file};
use log::info;
use thiserror::Error;

use crate::normalize::{NormalizeError, normalize};
use crate::source::SourceCityRecord;

const BUNDLED_CITIES: [(&str, &str); 2] = [
    ("albany.json", include_str!("../data/albany.json")),
    ("troy.json", include_str!("../data/troy.json")),
];

/// Errors raised while loading city files and building a catalog.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Listing the dataset directory failed.
    #[error("failed to read dataset directory {path}")]
    ReadDir {
        /// Directory that could not be listed.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The dataset directory holds no city files.
    #[error("dataset directory {path} contains no .json city files")]
    EmptyDir {
        /// Directory that was searched.
        path: Utf8PathBuf,
    },
    /// Opening a city file failed.
    #[error("failed to open city file {path}")]
    Open {
        /// City file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A city file was not valid JSON or did not match the record shape.
    #[error("failed to parse city file {source_name}")]
    Parse {
        /// File path or bundled file name.
        source_name: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A city record failed normalization.
    #[error("invalid landmark data in {source_name}")]
    Normalize {
        /// File path or bundled file name.
        source_name: String,
        /// Normalization failure.
        #[source]
        source: NormalizeError,
    },
    /// Two records name the same city, so their id prefixes would collide.
    #[error("city {city} appears in both {first} and {second}")]
    DuplicateCity {
        /// City name as written in the second record.
        city: String,
        /// Source of the first record.
        first: String,
        /// Source of the second record.
        second: String,
    },
    /// The combined landmarks could not form a catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Normalize named city records and combine them into one catalog.
///
/// Each record is paired with a human-readable source name used in error
/// messages. City names are compared case-insensitively: `Troy` and `troy`
/// would both produce the `troy-` id prefix.
pub fn catalog_from_records<I, S>(records: I) -> Result<Catalog, DatasetError>
where
    I: IntoIterator<Item = (S, SourceCityRecord)>,
    S: Into<String>,
{
    let mut seen_cities: HashMap<String, String> = HashMap::new();
    let mut landmarks = Vec::new();
    for (name, record) in records {
        let source_name: String = name.into();
        let key = record.city.trim().to_lowercase();
        if let Some(first) = seen_cities.get(&key) {
            return Err(DatasetError::DuplicateCity {
                city: record.city.clone(),
                first: first.clone(),
                second: source_name,
            });
        }
        let normalized = normalize(&record).map_err(|source| DatasetError::Normalize {
            source_name: source_name.clone(),
            source,
        })?;
        landmarks.extend(normalized);
        seen_cities.insert(key, source_name);
    }
    let catalog = Catalog::new(landmarks)?;
    info!(
        "loaded {} landmarks from {} cities ({} tags)",
        catalog.len(),
        seen_cities.len(),
        catalog.tag_index().len()
    );
    Ok(catalog)
}

/// Read and parse one city file.
pub fn load_city_file(path: &Utf8Path) -> Result<SourceCityRecord, DatasetError> {
    let file = open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Parse {
        source_name: path.to_string(),
        source,
    })
}

/// Build a catalog from every `*.json` file in `dir`, in file-name order.
pub fn load_dataset_dir(dir: &Utf8Path) -> Result<Catalog, DatasetError> {
    let paths = json_files_in_dir(dir).map_err(|source| DatasetError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if paths.is_empty() {
        return Err(DatasetError::EmptyDir {
            path: dir.to_path_buf(),
        });
    }
    let records = paths
        .into_iter()
        .map(|path| load_city_file(&path).map(|record| (path.to_string(), record)))
        .collect::<Result<Vec<_>, _>>()?;
    catalog_from_records(records)
}

/// Build the catalog from the compiled-in Albany and Troy city files.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), explorer_data::DatasetError> {
/// let catalog = explorer_data::bundled_catalog()?;
/// assert!(catalog.get("troy-1").is_some());
/// assert!(catalog.tag_index().contains("Albany"));
/// # Ok(())
/// # }
/// ```
pub fn bundled_catalog() -> Result<Catalog, DatasetError> {
    let records = BUNDLED_CITIES
        .iter()
        .map(|&(name, json)| {
            serde_json::from_str::<SourceCityRecord>(json)
                .map(|record| (name, record))
                .map_err(|source| DatasetError::Parse {
                    source_name: name.to_owned(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    catalog_from_records(records)
}
