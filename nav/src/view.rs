//! The seam to the rendering surface. The core drives these hooks; the
//! frontend (terminal, web, test double) decides how to draw them.

use crate::format::format_synset;
use castanet_protocol::FileSummary;
use castanet_protocol::SynsetId;
use std::fmt::Display;

/// Fixed label of the "previous" sentinel entry.
pub const PREVIOUS_LABEL: &str = "previous";

/// One selectable entry in the child menu. `Previous` is the fixed,
/// non-data sentinel rendered first; selecting it pops the path instead
/// of pushing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Previous,
    Child { id: SynsetId, label: String },
}

impl MenuEntry {
    pub fn child(id: impl Into<SynsetId>) -> Self {
        let id = id.into();
        let label = format_synset(&id).to_string();
        Self::Child { id, label }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Previous => PREVIOUS_LABEL,
            Self::Child { label, .. } => label,
        }
    }
}

/// Injection points the core drives on the rendering surface, plus the
/// single error channel. Errors must always reach the user; silently
/// dropping them is a contract violation.
pub trait NavigatorView {
    fn set_breadcrumb(&mut self, html: &str);

    fn clear_menu(&mut self);
    fn push_menu_entry(&mut self, entry: &MenuEntry);

    fn clear_files(&mut self);
    fn push_file_summary(&mut self, summary: &FileSummary);

    /// Refresh the menu's auxiliary index/pagination widget after the
    /// entries changed.
    fn refresh_menu_index(&mut self);

    fn show_error(&mut self, context: &str, error: &dyn Display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn child_entries_are_labelled_with_the_display_label() {
        let entry = MenuEntry::child("dog.n.01");
        assert_eq!(entry.label(), "dog");
        assert_eq!(
            entry,
            MenuEntry::Child {
                id: "dog.n.01".to_string(),
                label: "dog".to_string(),
            }
        );
    }

    #[test]
    fn the_sentinel_has_a_fixed_label() {
        assert_eq!(MenuEntry::Previous.label(), "previous");
    }
}
