//! Wire types and the path/keyword data model for the Castanet taxonomy
//! browser.
//!
//! The server exposes two endpoints: `castanet.do` resolves a pathway to
//! the children, files, and keywords of a hierarchy node, and
//! `autosummary.do` produces a per-file summary scoped to a keyword set.
//! This crate owns the request/response shapes and the comma-joined
//! serialization both endpoints expect.

mod path;
mod proto;

pub use path::KeywordContext;
pub use path::NavPath;
pub use path::SynsetId;
pub use proto::FILE_PARAM;
pub use proto::FileSummary;
pub use proto::NAVIGATE_ENDPOINT;
pub use proto::NavigateResponse;
pub use proto::PATHWAY_PARAM;
pub use proto::SELECTED_KEYWORDS_PARAM;
pub use proto::SUMMARY_ENDPOINT;
