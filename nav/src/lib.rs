//! Navigation core for the Castanet taxonomy browser.
//!
//! The pieces, leaves first:
//!
//! - [`format`] turns raw synset identifiers into display labels and
//!   renders the breadcrumb.
//! - [`state::NavigationState`] owns the current path and keyword
//!   context, the only mutable state in the core.
//! - [`reducer`] applies a navigate response to the state and the view.
//! - [`view::NavigatorView`] is the seam to the rendering surface; the
//!   core drives it but does not own its implementation.
//! - [`session::NavSession`] wires state, client, and view together and
//!   fans out per-file summary requests.

pub mod format;
pub mod reducer;
pub mod session;
pub mod state;
pub mod view;

pub use reducer::SummaryBatch;
pub use session::NavSession;
pub use session::Selection;
pub use state::NavigationState;
pub use view::MenuEntry;
pub use view::NavigatorView;
