//! The immutable landmark list a session browses.

use std::collections::HashMap;

use thiserror::Error;

use crate::{ActiveTags, Landmark, TagIndex, filter_visible};

/// Validated, read-only collection of landmarks with its tag index.
///
/// Landmarks keep the order they were supplied in; markers and filter results
/// follow that order.
///
/// # Examples
/// ```
/// use explorer_core::{Catalog, Landmark};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Landmark::new("albany-1", "State Museum", 42.648, -73.760)?
///         .with_tags(["Museum", "Albany"]),
/// ])?;
/// assert!(catalog.get("albany-1").is_some());
/// assert_eq!(catalog.tag_index().to_vec(), ["Albany", "Museum"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    landmarks: Vec<Landmark>,
    positions: HashMap<String, usize>,
    tag_index: TagIndex,
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two landmarks share an identifier.
    #[error("duplicate landmark id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(landmarks.len());
        for (position, landmark) in landmarks.iter().enumerate() {
            if positions.insert(landmark.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: landmark.id.clone(),
                });
            }
        }
        let tag_index = TagIndex::build(&landmarks);
        Ok(Self {
            landmarks,
            positions,
            tag_index,
        })
    }

    /// Every landmark in source order.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Look up a landmark by identifier.
    pub fn get(&self, id: &str) -> Option<&Landmark> {
        self.positions
            .get(id)
            .and_then(|&position| self.landmarks.get(position))
    }

    /// Sorted set of every tag in the catalog.
    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    /// Landmarks visible under `active`, in source order.
    pub fn visible(&self, active: &ActiveTags) -> Vec<&Landmark> {
        filter_visible(&self.landmarks, active)
    }

    /// Number of landmarks.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Return whether the catalog holds no landmarks.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn landmark(id: &str, tags: [&str; 2]) -> Landmark {
        Landmark::new(id, id, 0.0, 0.0).unwrap().with_tags(tags)
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            landmark("troy-1", ["Park", "Troy"]),
            landmark("troy-1", ["History", "Troy"]),
        ]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateId {
                id: "troy-1".into()
            })
        );
    }

    #[rstest]
    fn same_local_id_in_different_cities_is_fine() {
        let catalog = Catalog::new(vec![
            landmark("troy-1", ["Park", "Troy"]),
            landmark("albany-1", ["Museum", "Albany"]),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        let albany = catalog.get("albany-1").unwrap();
        assert_eq!(albany.tags, ["Museum", "Albany"]);
    }

    #[rstest]
    fn unknown_id_is_absent() {
        let catalog = Catalog::new(vec![landmark("troy-1", ["Park", "Troy"])]).unwrap();
        assert!(catalog.get("troy-2").is_none());
    }

    #[rstest]
    fn empty_catalog_has_no_tags() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.tag_index().is_empty());
    }
}
