//! AND-semantics tag filtering over landmark sequences.

use geo::{Coord, Rect};

use crate::{ActiveTags, Landmark};

/// Return whether `landmark` carries every tag in `active`.
///
/// An empty tag set matches everything.
///
/// # Examples
/// ```
/// use explorer_core::{ActiveTags, Landmark, is_visible};
///
/// # fn main() -> Result<(), explorer_core::LandmarkError> {
/// let park = Landmark::new("troy-2", "Prospect Park", 42.728, -73.687)?
///     .with_tags(["Park", "Troy"]);
/// assert!(is_visible(&park, &ActiveTags::new()));
/// assert!(is_visible(&park, &["Park"].into_iter().collect()));
/// assert!(!is_visible(&park, &["Park", "History"].into_iter().collect()));
/// # Ok(())
/// # }
/// ```
pub fn is_visible(landmark: &Landmark, active: &ActiveTags) -> bool {
    active.iter().all(|tag| landmark.has_tag(tag))
}

/// Keep the landmarks visible under `active`, preserving their order.
pub fn filter_visible<'a, I>(landmarks: I, active: &ActiveTags) -> Vec<&'a Landmark>
where
    I: IntoIterator<Item = &'a Landmark>,
{
    landmarks
        .into_iter()
        .filter(|landmark| is_visible(landmark, active))
        .collect()
}

/// Bounding box covering every landmark, or `None` when there are none.
///
/// Coordinates follow `geo` conventions: `x = lng`, `y = lat`.
pub fn bounds<'a, I>(landmarks: I) -> Option<Rect<f64>>
where
    I: IntoIterator<Item = &'a Landmark>,
{
    landmarks.into_iter().fold(None, |acc, landmark| {
        let point = landmark.location();
        Some(match acc {
            None => Rect::new(point, point),
            Some(existing) => Rect::new(
                Coord {
                    x: existing.min().x.min(point.x),
                    y: existing.min().y.min(point.y),
                },
                Coord {
                    x: existing.max().x.max(point.x),
                    y: existing.max().y.max(point.y),
                },
            ),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn landmarks() -> Vec<Landmark> {
        vec![
            Landmark::new("albany-1", "State Museum", 42.6483, -73.7603)
                .unwrap()
                .with_tags(["Museum", "Albany"]),
            Landmark::new("troy-1", "Prospect Park", 42.728, -73.6869)
                .unwrap()
                .with_tags(["Park", "Troy"]),
        ]
    }

    fn ids(visible: &[&Landmark]) -> Vec<String> {
        visible.iter().map(|l| l.id.clone()).collect()
    }

    #[rstest]
    #[case(&[], &["albany-1", "troy-1"])]
    #[case(&["Museum"], &["albany-1"])]
    #[case(&["Park", "Troy"], &["troy-1"])]
    #[case(&["Museum", "Troy"], &[])]
    #[case(&["Unknown"], &[])]
    fn filters_with_and_semantics(
        landmarks: Vec<Landmark>,
        #[case] active: &[&str],
        #[case] expected: &[&str],
    ) {
        let active: ActiveTags = active.iter().copied().collect();
        let visible = filter_visible(&landmarks, &active);
        assert_eq!(ids(&visible), expected);
    }

    #[rstest]
    fn adding_a_tag_can_hide_an_earlier_match(landmarks: Vec<Landmark>) {
        let park_only: ActiveTags = ["Park"].into_iter().collect();
        assert_eq!(ids(&filter_visible(&landmarks, &park_only)), ["troy-1"]);
        let with_history = park_only.toggled("History");
        assert!(filter_visible(&landmarks, &with_history).is_empty());
    }

    #[rstest]
    fn bounds_span_every_landmark(landmarks: Vec<Landmark>) {
        let rect = bounds(&landmarks).unwrap();
        assert_eq!(rect.min(), Coord { x: -73.7603, y: 42.6483 });
        assert_eq!(rect.max(), Coord { x: -73.6869, y: 42.728 });
    }

    #[rstest]
    fn bounds_of_nothing_is_none() {
        assert!(bounds(std::iter::empty()).is_none());
    }
}
