//! Test-only sample data shared by unit and behaviour tests.

use crate::{Catalog, Landmark};

/// Two landmarks in two cities with disjoint tags.
///
/// `albany-1` is tagged `["Museum", "Albany"]`; `troy-1` is tagged
/// `["Park", "Troy"]`.
pub fn sample_landmarks() -> Vec<Landmark> {
    let museum = Landmark::new("albany-1", "New York State Museum", 42.6483, -73.7603)
        .map(|landmark| {
            landmark
                .with_description("State history and natural science collections.")
                .with_address("222 Madison Ave, Albany, NY")
                .with_website("https://www.nysm.nysed.gov")
                .with_tags(["Museum", "Albany"])
        });
    let park = Landmark::new("troy-1", "Prospect Park", 42.728, -73.6869).map(|landmark| {
        landmark
            .with_description("Scenic overlooks and trails.")
            .with_address("Congress St & Prospect Ave, Troy, NY")
            .with_tags(["Park", "Troy"])
    });
    [museum, park].into_iter().flatten().collect()
}

/// Catalog over [`sample_landmarks`].
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_landmarks()).unwrap_or_default()
}
