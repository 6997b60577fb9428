/// Opaque hierarchy-node identifier, conventionally `<label>.<suffix...>`.
/// Only the first dot-segment is ever shown to users.
pub type SynsetId = String;

/// Root-to-current sequence of synsets describing a location in the
/// hierarchy. The empty path is the root.
///
/// A path only ever changes by `push`, `pop`, or `clear`; it is never
/// reordered or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavPath {
    segments: Vec<SynsetId>,
}

impl NavPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SynsetId>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, id: impl Into<SynsetId>) {
        self.segments.push(id.into());
    }

    /// Removes and returns the last segment. Popping the root is a no-op.
    pub fn pop(&mut self) -> Option<SynsetId> {
        self.segments.pop()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[SynsetId] {
        &self.segments
    }

    pub fn last(&self) -> Option<&SynsetId> {
        self.segments.last()
    }

    /// Wire form of the path: comma-joined segments, the empty string for
    /// the root. This is the value of the `pathway` form field.
    pub fn to_pathway(&self) -> String {
        self.segments.join(",")
    }
}

/// Ordered display labels scoping file summarization at the current path.
///
/// Replaced wholesale on every navigation. Order and duplicates coming
/// from the server are preserved verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordContext {
    labels: Vec<String>,
}

impl KeywordContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Wire form: comma-joined labels, the value of `selectedKeywords`.
    pub fn to_param(&self) -> String {
        self.labels.join(",")
    }
}
