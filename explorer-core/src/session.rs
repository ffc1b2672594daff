//! Browsing session state: the active filter chips and the landmark shown in
//! the detail panel.
//!
//! The two pieces of state are coupled by one rule, applied only when a chip
//! is toggled: a selected landmark that the new filter hides is deselected.
//! Clearing every filter can only widen the visible set, so it never touches
//! the selection; neither does a marker click, because only visible markers
//! can be clicked.

use log::debug;

use crate::{ActiveTags, Catalog, Landmark, TagIndex, is_visible, view::SessionView};

/// One user's browsing state over a borrowed [`Catalog`].
///
/// # Examples
/// ```
/// use explorer_core::{Catalog, Landmark, Session};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new(vec![
///     Landmark::new("troy-1", "Prospect Park", 42.728, -73.687)?
///         .with_tags(["Park", "Troy"]),
/// ])?;
/// let mut session = Session::new(&catalog);
/// session.select_by_id("troy-1");
/// session.toggle_tag("History");
/// assert!(session.selected().is_none());
/// assert!(session.visible_landmarks().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    active_tags: ActiveTags,
    selected: Option<&'c Landmark>,
}

impl<'c> Session<'c> {
    /// Start a session with no filters and no selection.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            active_tags: ActiveTags::new(),
            selected: None,
        }
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Tags currently enabled as filters.
    pub fn active_tags(&self) -> &ActiveTags {
        &self.active_tags
    }

    /// Sorted chip labels for the catalog.
    pub fn tag_index(&self) -> &'c TagIndex {
        self.catalog.tag_index()
    }

    /// The landmark shown in the detail panel, if any.
    pub fn selected(&self) -> Option<&'c Landmark> {
        self.selected
    }

    /// Show `landmark` in the detail panel.
    ///
    /// The landmark must be an entry of [`Self::catalog`], compared by
    /// identity; anything else is ignored and `false` is returned. No
    /// visibility check is made: markers are only clickable while visible.
    pub fn select_landmark(&mut self, landmark: &'c Landmark) -> bool {
        let in_catalog = self
            .catalog
            .get(&landmark.id)
            .is_some_and(|entry| std::ptr::eq(entry, landmark));
        if in_catalog {
            self.selected = Some(landmark);
        } else {
            debug!("ignoring selection of {} from outside the catalog", landmark.id);
        }
        in_catalog
    }

    /// Select the landmark whose marker reported a click.
    ///
    /// Unknown identifiers leave the selection unchanged and return `None`.
    pub fn select_by_id(&mut self, id: &str) -> Option<&'c Landmark> {
        let landmark = self.catalog.get(id);
        match landmark {
            Some(found) => self.selected = Some(found),
            None => debug!("ignoring selection of unknown landmark {id}"),
        }
        landmark
    }

    /// Dismiss the detail panel.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Flip `tag` in the active set and drop a selection the new set hides.
    ///
    /// Returns `true` when the tag is active afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let next = self.active_tags.toggled(tag);
        let activated = next.contains(tag);
        self.active_tags = next;
        if let Some(current) = self.selected
            && !is_visible(current, &self.active_tags)
        {
            debug!(
                "deselecting {} after toggling {tag}: no longer matches the active filters",
                current.id
            );
            self.selected = None;
        }
        activated
    }

    /// Deactivate every filter. The selection is kept.
    pub fn clear_all_tags(&mut self) {
        self.active_tags.clear();
    }

    /// Landmarks that pass the active filters, in catalog order.
    pub fn visible_landmarks(&self) -> Vec<&'c Landmark> {
        self.catalog.visible(&self.active_tags)
    }

    /// Snapshot of everything a presentation surface renders.
    pub fn view(&self) -> SessionView {
        SessionView::capture(self)
    }
}
