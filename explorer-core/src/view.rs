//! Render-ready snapshots of a [`Session`].
//!
//! A presentation surface draws these values and reports interaction back to
//! the session: marker clicks to [`Session::select_by_id`], chip clicks to
//! [`Session::toggle_tag`], the panel's close button to
//! [`Session::clear_selection`] and the clear button to
//! [`Session::clear_all_tags`].

use geo::Rect;

use crate::{Landmark, Session, bounds};

/// A filter toggle for one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chip {
    /// Label and filter value.
    pub tag: String,
    /// Whether the tag is currently filtering.
    pub active: bool,
}

/// A map marker for one visible landmark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Marker {
    /// Identifier reported back on click.
    pub id: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Contents of the bottom detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetailPanel {
    /// Identifier of the selected landmark.
    pub id: String,
    /// Panel title.
    pub name: String,
    /// Body text.
    pub description: String,
    /// Street address line, omitted when unknown.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,
    /// Link target, omitted when unknown.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub website: Option<String>,
    /// Tag pills.
    pub tags: Vec<String>,
}

impl From<&Landmark> for DetailPanel {
    fn from(landmark: &Landmark) -> Self {
        Self {
            id: landmark.id.clone(),
            name: landmark.name.clone(),
            description: landmark.description.clone(),
            address: landmark.address.clone(),
            website: landmark.website.clone(),
            tags: landmark.tags.clone(),
        }
    }
}

/// Everything a surface needs to draw one frame.
///
/// # Examples
/// ```
/// use explorer_core::{Catalog, Landmark, Session};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Landmark::new("albany-1", "State Museum", 42.648, -73.760)?
///         .with_tags(["Museum", "Albany"]),
/// ])?;
/// let mut session = Session::new(&catalog);
/// session.toggle_tag("Museum");
/// let view = session.view();
/// assert_eq!(view.active_filter_count, 1);
/// assert!(view.clear_all_enabled);
/// assert_eq!(view.markers.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SessionView {
    /// One chip per known tag, sorted.
    pub chips: Vec<Chip>,
    /// Number of active filters.
    pub active_filter_count: usize,
    /// Whether the "clear all" control is enabled.
    pub clear_all_enabled: bool,
    /// Markers for the visible landmarks, in catalog order.
    pub markers: Vec<Marker>,
    /// Box enclosing the visible markers, `x = lng`, `y = lat`.
    pub bounds: Option<Rect<f64>>,
    /// Detail panel for the selected landmark.
    pub detail: Option<DetailPanel>,
}

impl SessionView {
    pub(crate) fn capture(session: &Session<'_>) -> Self {
        let active = session.active_tags();
        let chips = session
            .tag_index()
            .iter()
            .map(|tag| Chip {
                tag: tag.to_owned(),
                active: active.contains(tag),
            })
            .collect();
        let visible = session.visible_landmarks();
        let markers = visible
            .iter()
            .map(|landmark| Marker {
                id: landmark.id.clone(),
                lat: landmark.lat,
                lng: landmark.lng,
            })
            .collect();
        Self {
            chips,
            active_filter_count: active.len(),
            clear_all_enabled: !active.is_empty(),
            markers,
            bounds: bounds(visible.iter().copied()),
            detail: session.selected().map(DetailPanel::from),
        }
    }
}
