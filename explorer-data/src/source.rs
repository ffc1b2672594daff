//! Per-city source records as they appear in the bundled JSON files.
//!
//! Every field except `city` is optional at this layer so the normalizer can
//! name exactly which entry is missing what.

use std::fmt;

use serde::Deserialize;

/// One city file: the city name and its landmarks in source order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceCityRecord {
    /// City name; also the city tag and the lowercased id prefix.
    pub city: String,
    /// Raw landmark entries.
    #[serde(default)]
    pub landmarks: Vec<RawLandmark>,
}

/// A landmark entry before normalization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawLandmark {
    /// Identifier local to the city file.
    #[serde(default)]
    pub id: Option<RawLandmarkId>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Homepage URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Category, used as the first tag.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Source-local identifier; city files use both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawLandmarkId {
    /// Numeric identifier such as `1`.
    Number(u64),
    /// Textual identifier such as `"plaza"`.
    Text(String),
}

impl fmt::Display for RawLandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}
