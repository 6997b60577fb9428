use castanet_nav::MenuEntry;
use castanet_nav::NavigatorView;
use castanet_protocol::FileSummary;
use std::fmt::Display;

/// Terminal rendering surface. Menu entries are numbered; the sentinel
/// always sits at index 0 so "0" ascends and positive numbers descend.
#[derive(Default)]
pub struct TerminalView {
    entries: Vec<MenuEntry>,
    breadcrumb: String,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    pub fn menu_len(&self) -> usize {
        self.entries.len()
    }
}

/// The core's breadcrumb contract uses `<b>` emphasis; the terminal has
/// no bold, so the tokens are dropped here at the view seam.
pub fn strip_markup(html: &str) -> String {
    html.replace("<b>", "").replace("</b>", "")
}

impl NavigatorView for TerminalView {
    fn set_breadcrumb(&mut self, html: &str) {
        self.breadcrumb = strip_markup(html);
    }

    fn clear_menu(&mut self) {
        self.entries.clear();
    }

    fn push_menu_entry(&mut self, entry: &MenuEntry) {
        self.entries.push(entry.clone());
    }

    fn clear_files(&mut self) {}

    fn push_file_summary(&mut self, summary: &FileSummary) {
        println!();
        println!("  {}", summary.filepath);
        println!("  keywords: {}", summary.selected_keywords);
        println!("  {}", summary.summary);
    }

    fn refresh_menu_index(&mut self) {
        println!();
        if self.breadcrumb.is_empty() {
            println!("/");
        } else {
            println!("{}", self.breadcrumb);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            println!("  [{index}] {}", entry.label());
        }
    }

    fn show_error(&mut self, context: &str, error: &dyn Display) {
        eprintln!("error: {context}: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn markup_is_stripped_for_the_terminal() {
        assert_eq!(strip_markup("a<b> > </b><b>b</b>"), "a > b");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn the_sentinel_occupies_index_zero() {
        let mut view = TerminalView::new();
        view.push_menu_entry(&MenuEntry::Previous);
        view.push_menu_entry(&MenuEntry::child("dog.n.01"));
        assert_eq!(view.entry(0), Some(&MenuEntry::Previous));
        assert_eq!(view.entry(1).map(MenuEntry::label), Some("dog"));
        assert_eq!(view.entry(2), None);
    }
}
