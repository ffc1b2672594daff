//! Landmark dataset loading for the explorer.
//!
//! Responsibilities:
//! - Describe the per-city JSON source records.
//! - Normalize records into core [`Landmark`](explorer_core::Landmark) values
//!   with city-prefixed identifiers.
//! - Assemble a [`Catalog`](explorer_core::Catalog) from a directory of city
//!   files or from the compiled-in Capital Region dataset.
//!
//! Boundaries:
//! - Filtering and selection rules live in `explorer-core`.
//!
//! Invariants:
//! - Loading fails as a whole; a partially built catalog is never returned.
#![forbid(unsafe_code)]

mod dataset;
mod normalize;
mod source;

pub use dataset::{
    DatasetError, bundled_catalog, catalog_from_records, load_city_file, load_dataset_dir,
};
pub use normalize::{NormalizeError, normalize};
pub use source::{RawLandmark, RawLandmarkId, SourceCityRecord};
