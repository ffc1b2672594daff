//! Facade crate for the landmark explorer.
//!
//! This crate re-exports the core domain types and exposes the dataset loaders
//! behind feature flags.

#![forbid(unsafe_code)]

pub use explorer_core::{
    ActiveTags, Catalog, CatalogError, Landmark, LandmarkError, Session, TagIndex, bounds,
    filter_visible, is_visible,
};

pub use explorer_core::view::{Chip, DetailPanel, Marker, SessionView};

#[cfg(feature = "bundled-data")]
pub use explorer_data::{
    DatasetError, NormalizeError, SourceCityRecord, bundled_catalog, catalog_from_records,
    load_dataset_dir, normalize,
};
