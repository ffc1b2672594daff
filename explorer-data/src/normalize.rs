//! Conversion from per-city source records to catalog landmarks.

use explorer_core::{Landmark, LandmarkError};
use log::debug;
use thiserror::Error;

use crate::source::{RawLandmark, SourceCityRecord};

/// Errors raised while normalizing a [`SourceCityRecord`].
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    /// The record's city name was empty or whitespace.
    #[error("city record has a blank city name")]
    BlankCity,
    /// A landmark entry lacked a required field.
    #[error("{city} landmark #{position} is missing required field `{field}`")]
    MissingField {
        /// City the entry belongs to.
        city: String,
        /// Zero-based position of the entry in the city file.
        position: usize,
        /// Name of the absent field as written in the source file.
        field: &'static str,
    },
    /// A landmark entry failed domain validation.
    #[error("{city} landmark #{position} is invalid")]
    InvalidLandmark {
        /// City the entry belongs to.
        city: String,
        /// Zero-based position of the entry in the city file.
        position: usize,
        /// Validation failure from the core model.
        #[source]
        source: LandmarkError,
    },
}

/// Normalize every entry of one city record.
///
/// Identifiers become `lowercase(city) + "-" + id`; the tags are the entry's
/// category followed by the city name.
///
/// # Examples
/// ```
/// use explorer_data::{SourceCityRecord, normalize};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let record: SourceCityRecord = serde_json::from_str(
///     r#"{"city":"Troy","landmarks":[
///         {"id":1,"name":"RPI Campus","latitude":42.7294,"longitude":-73.6792,"type":"History"}
///     ]}"#,
/// )?;
/// let landmarks = normalize(&record)?;
/// assert_eq!(landmarks[0].id, "troy-1");
/// assert_eq!(landmarks[0].tags, ["History", "Troy"]);
/// # Ok(())
/// # }
/// ```
pub fn normalize(record: &SourceCityRecord) -> Result<Vec<Landmark>, NormalizeError> {
    let city = record.city.trim();
    if city.is_empty() {
        return Err(NormalizeError::BlankCity);
    }
    let prefix = city.to_lowercase();
    let landmarks = record
        .landmarks
        .iter()
        .enumerate()
        .map(|(position, raw)| normalize_entry(city, &prefix, position, raw))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("normalized {} landmarks for {city}", landmarks.len());
    Ok(landmarks)
}

fn normalize_entry(
    city: &str,
    prefix: &str,
    position: usize,
    raw: &RawLandmark,
) -> Result<Landmark, NormalizeError> {
    let missing = |field: &'static str| NormalizeError::MissingField {
        city: city.to_owned(),
        position,
        field,
    };
    let local_id = raw.id.as_ref().ok_or_else(|| missing("id"))?;
    let name = raw.name.as_deref().ok_or_else(|| missing("name"))?;
    let lat = raw.latitude.ok_or_else(|| missing("latitude"))?;
    let lng = raw.longitude.ok_or_else(|| missing("longitude"))?;
    let kind = raw
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .ok_or_else(|| missing("type"))?;

    let mut landmark = Landmark::new(format!("{prefix}-{local_id}"), name, lat, lng)
        .map_err(|source| NormalizeError::InvalidLandmark {
            city: city.to_owned(),
            position,
            source,
        })?
        .with_description(raw.description.clone().unwrap_or_default());
    if let Some(address) = non_blank(raw.address.as_deref()) {
        landmark = landmark.with_address(address);
    }
    if let Some(website) = non_blank(raw.website.as_deref()) {
        landmark = landmark.with_website(website);
    }
    Ok(landmark.with_tags([kind, city]))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
