//! Applies a navigate response to the state and the view.

use crate::format::format_synset;
use crate::state::NavigationState;
use crate::view::MenuEntry;
use crate::view::NavigatorView;
use castanet_protocol::KeywordContext;
use castanet_protocol::NavigateResponse;

/// The per-file summary work a navigate response asks for: the files at
/// the new location, the keyword context to summarize them under, and
/// the epoch that issued the batch (used to discard stale completions).
#[derive(Clone, Debug)]
pub struct SummaryBatch {
    pub epoch: u64,
    pub files: Vec<String>,
    pub keywords: KeywordContext,
}

impl SummaryBatch {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Renders the response and replaces the keyword context.
///
/// The menu gets the "previous" sentinel first, then one entry per child
/// in server order. The file list is cleared; fetching the summaries is
/// the caller's job, under the keyword context returned here (the new
/// one, not the pre-navigation one). Keywords are mapped through
/// `format_synset` verbatim, duplicates included.
pub fn apply<V: NavigatorView>(
    state: &mut NavigationState,
    response: &NavigateResponse,
    view: &mut V,
) -> SummaryBatch {
    view.clear_menu();
    view.push_menu_entry(&MenuEntry::Previous);
    for child in &response.children {
        view.push_menu_entry(&MenuEntry::child(child.clone()));
    }

    view.clear_files();

    state.replace_keywords(
        response
            .keywords
            .iter()
            .map(|keyword| format_synset(keyword).to_string()),
    );

    view.refresh_menu_index();

    SummaryBatch {
        epoch: state.epoch(),
        files: response.files.clone(),
        keywords: state.keywords().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castanet_protocol::FileSummary;
    use pretty_assertions::assert_eq;
    use std::fmt::Display;

    #[derive(Default)]
    struct RecordingView {
        log: Vec<String>,
        entries: Vec<MenuEntry>,
    }

    impl NavigatorView for RecordingView {
        fn set_breadcrumb(&mut self, html: &str) {
            self.log.push(format!("breadcrumb:{html}"));
        }

        fn clear_menu(&mut self) {
            self.entries.clear();
            self.log.push("clear_menu".to_string());
        }

        fn push_menu_entry(&mut self, entry: &MenuEntry) {
            self.entries.push(entry.clone());
            self.log.push(format!("menu:{}", entry.label()));
        }

        fn clear_files(&mut self) {
            self.log.push("clear_files".to_string());
        }

        fn push_file_summary(&mut self, summary: &FileSummary) {
            self.log.push(format!("file:{}", summary.filepath));
        }

        fn refresh_menu_index(&mut self) {
            self.log.push("refresh".to_string());
        }

        fn show_error(&mut self, context: &str, error: &dyn Display) {
            self.log.push(format!("error:{context}:{error}"));
        }
    }

    fn dog_cat_response() -> NavigateResponse {
        NavigateResponse {
            children: vec!["dog.1".to_string(), "cat.2".to_string()],
            files: vec!["f1".to_string()],
            keywords: vec!["animal.0".to_string()],
        }
    }

    #[test]
    fn renders_sentinel_then_children_in_server_order() {
        let mut state = NavigationState::new();
        let mut view = RecordingView::default();
        apply(&mut state, &dog_cat_response(), &mut view);

        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.entries[0], MenuEntry::Previous);
        assert_eq!(view.entries[1].label(), "dog");
        assert_eq!(view.entries[2].label(), "cat");
        assert_eq!(
            view.log,
            [
                "clear_menu",
                "menu:previous",
                "menu:dog",
                "menu:cat",
                "clear_files",
                "refresh",
            ]
        );
    }

    #[test]
    fn keywords_are_formatted_and_replace_the_context() {
        let mut state = NavigationState::new();
        state.replace_keywords(["stale"]);
        let mut view = RecordingView::default();
        apply(&mut state, &dog_cat_response(), &mut view);
        assert_eq!(state.keywords().labels(), ["animal"]);
    }

    #[test]
    fn duplicate_keywords_survive_verbatim() {
        let mut state = NavigationState::new();
        let mut view = RecordingView::default();
        let response = NavigateResponse {
            children: vec![],
            files: vec![],
            keywords: vec!["dog.1".to_string(), "dog.2".to_string(), "cat.1".to_string()],
        };
        let batch = apply(&mut state, &response, &mut view);
        assert_eq!(state.keywords().labels(), ["dog", "dog", "cat"]);
        assert!(batch.is_empty());
    }

    #[test]
    fn the_batch_carries_the_new_keyword_context() {
        let mut state = NavigationState::new();
        state.replace_keywords(["old"]);
        let mut view = RecordingView::default();
        let batch = apply(&mut state, &dog_cat_response(), &mut view);
        assert_eq!(batch.files, ["f1"]);
        assert_eq!(batch.keywords.labels(), ["animal"]);
        assert_eq!(batch.epoch, state.epoch());
    }
}
