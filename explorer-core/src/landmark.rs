//! Landmarks: named points of interest carrying classification tags.

use geo::Coord;
use thiserror::Error;

/// A single point of interest shown as a marker on the map.
///
/// Coordinates are WGS84. Tags are ordered as supplied: the category tag
/// first, followed by the city name for normalized landmarks.
///
/// # Examples
/// ```
/// use explorer_core::Landmark;
///
/// # fn main() -> Result<(), explorer_core::LandmarkError> {
/// let landmark = Landmark::new("troy-1", "RPI Campus", 42.7294, -73.6792)?
///     .with_description("Walkable campus views and architecture.")
///     .with_tags(["History", "Troy"]);
/// assert_eq!(landmark.id, "troy-1");
/// assert!(landmark.has_tag("Troy"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landmark {
    /// Identifier, unique across every city in a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description shown in the detail panel.
    pub description: String,
    /// Street address, when known.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Homepage URL, when known.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub website: Option<String>,
    /// Classification tags in source order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

/// Errors returned by [`Landmark::new`].
#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    /// The identifier was empty or whitespace.
    #[error("landmark id must not be empty")]
    EmptyId,
    /// The display name was empty or whitespace.
    #[error("landmark {id} must have a name")]
    EmptyName {
        /// Identifier of the offending landmark.
        id: String,
    },
    /// The coordinates were not finite or fell outside WGS84 ranges.
    #[error("landmark {id} has invalid coordinates (lat {lat}, lng {lng})")]
    InvalidCoordinates {
        /// Identifier of the offending landmark.
        id: String,
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lng: f64,
    },
}

impl Landmark {
    /// Validates and constructs a [`Landmark`] without description, address,
    /// website or tags.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Result<Self, LandmarkError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(LandmarkError::EmptyId);
        }
        if name.trim().is_empty() {
            return Err(LandmarkError::EmptyName { id });
        }
        if !valid_coordinates(lat, lng) {
            return Err(LandmarkError::InvalidCoordinates { id, lat, lng });
        }
        Ok(Self {
            id,
            name,
            description: String::new(),
            address: None,
            lat,
            lng,
            website: None,
            tags: Vec::new(),
        })
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the street address while returning `self` for chaining.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the homepage URL while returning `self` for chaining.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Replace the tag list while returning `self` for chaining.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Return whether the landmark carries `tag`.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| own == tag)
    }

    /// Position as a `geo` coordinate with `x = lng` and `y = lat`.
    ///
    /// # Examples
    /// ```
    /// use explorer_core::Landmark;
    ///
    /// let landmark = Landmark::new("albany-1", "Plaza", 42.65, -73.75).unwrap();
    /// assert_eq!(landmark.location().x, -73.75);
    /// ```
    pub fn location(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

fn valid_coordinates(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}
