//! Core domain types for the landmark explorer.
//!
//! A [`Catalog`] holds the validated landmark list and its [`TagIndex`]. A
//! [`Session`] borrows a catalog and tracks the active filter chips and the
//! selected landmark; [`view::SessionView`] snapshots that state for a
//! presentation surface.
//!
//! # Examples
//! ```
//! use explorer_core::{Catalog, Landmark, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new(vec![
//!     Landmark::new("albany-1", "State Museum", 42.648, -73.760)?
//!         .with_tags(["Museum", "Albany"]),
//!     Landmark::new("troy-1", "Prospect Park", 42.728, -73.687)?
//!         .with_tags(["Park", "Troy"]),
//! ])?;
//! let mut session = Session::new(&catalog);
//! session.toggle_tag("Museum");
//! let ids: Vec<_> = session.visible_landmarks().iter().map(|l| l.id.as_str()).collect();
//! assert_eq!(ids, ["albany-1"]);
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod catalog;
pub mod filter;
pub mod landmark;
pub mod session;
pub mod tags;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use filter::{bounds, filter_visible, is_visible};
pub use landmark::{Landmark, LandmarkError};
pub use session::Session;
pub use tags::{ActiveTags, TagIndex};
