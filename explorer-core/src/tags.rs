//! Tag collections: the sorted index of every known tag and the set of tags a
//! user has enabled as filters.
//!
//! Both are backed by `BTreeSet`, so uniqueness comes from the data structure
//! and iteration order is always lexicographic.

use std::collections::BTreeSet;

use crate::Landmark;

/// Sorted, de-duplicated union of every tag carried by a set of landmarks.
///
/// # Examples
/// ```
/// use explorer_core::{Landmark, TagIndex};
///
/// # fn main() -> Result<(), explorer_core::LandmarkError> {
/// let landmarks = [
///     Landmark::new("troy-1", "Park", 42.7, -73.6)?.with_tags(["Park", "Troy"]),
///     Landmark::new("albany-1", "Museum", 42.6, -73.7)?.with_tags(["Museum", "Albany"]),
/// ];
/// let index = TagIndex::build(&landmarks);
/// assert_eq!(index.to_vec(), ["Albany", "Museum", "Park", "Troy"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagIndex {
    tags: BTreeSet<String>,
}

impl TagIndex {
    /// Collect every tag from `landmarks`.
    pub fn build<'a, I>(landmarks: I) -> Self
    where
        I: IntoIterator<Item = &'a Landmark>,
    {
        let tags = landmarks
            .into_iter()
            .flat_map(|landmark| landmark.tags.iter().cloned())
            .collect();
        Self { tags }
    }

    /// Iterate over the tags in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(String::as_str)
    }

    /// Return whether `tag` appears on any landmark.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Return whether no landmark carries any tag.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Copy the tags into a sorted vector.
    pub fn to_vec(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }
}

/// Tags currently enabled as filter criteria.
///
/// The empty set means "no filtering".
///
/// # Examples
/// ```
/// use explorer_core::ActiveTags;
///
/// let mut active = ActiveTags::new();
/// assert!(active.toggle("Museum"));
/// assert!(active.contains("Museum"));
/// assert!(!active.toggle("Museum"));
/// assert!(active.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveTags {
    tags: BTreeSet<String>,
}

impl ActiveTags {
    /// Construct an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this set with `tag` removed if present, else added.
    #[must_use]
    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.toggle(tag);
        next
    }

    /// Remove `tag` if present, else add it.
    ///
    /// Returns `true` when the tag is active afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_owned());
            true
        }
    }

    /// Return whether `tag` is active.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Deactivate every tag.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Return whether no tag is active.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of active tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate over the active tags in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveTags {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
