//! The navigation state machine: an owned path plus the keyword context
//! in effect at that path.

use castanet_protocol::KeywordContext;
use castanet_protocol::NavPath;
use castanet_protocol::SynsetId;

/// The only mutable state in the core. Created once per session with an
/// empty path and empty keywords; every user action mutates it through
/// `push`/`pop`/`reset` and nothing else.
///
/// Each transition bumps an epoch counter. Summary batches are tagged
/// with the epoch that issued them, so results arriving after a newer
/// navigation can be recognized as stale and discarded.
#[derive(Clone, Debug, Default)]
pub struct NavigationState {
    path: NavPath,
    keywords: KeywordContext,
    epoch: u64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &NavPath {
        &self.path
    }

    pub fn keywords(&self) -> &KeywordContext {
        &self.keywords
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Descend into a child node.
    pub fn push(&mut self, id: impl Into<SynsetId>) {
        self.path.push(id);
        self.bump();
    }

    /// Ascend one level. Popping the root is a silent no-op, but still
    /// counts as a transition: the legacy frontend re-requested the root
    /// in that case and so do we.
    pub fn pop(&mut self) -> Option<SynsetId> {
        let popped = self.path.pop();
        self.bump();
        popped
    }

    /// Return to the root. Used at initial load.
    pub fn reset(&mut self) {
        self.path.clear();
        self.bump();
    }

    /// Wholesale replacement of the keyword context from a navigate
    /// response. Order and duplicates are preserved verbatim.
    pub fn replace_keywords<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.replace(labels);
    }

    fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}
