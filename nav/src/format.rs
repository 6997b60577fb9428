//! Display formatting for synset identifiers and the breadcrumb.

use castanet_protocol::NavPath;

/// Display label for a synset: the text before the first `.`.
/// Identifiers without a dot are returned unchanged.
pub fn format_synset(id: &str) -> &str {
    match id.split_once('.') {
        Some((label, _)) => label,
        None => id,
    }
}

/// Breadcrumb for a path: non-last elements followed by a `<b> > </b>`
/// separator, the last element wrapped in `<b>..</b>`, the empty path
/// rendered as the empty string. The markup tokens are part of the view
/// contract; terminal frontends strip them on their side of the seam.
pub fn format_path(path: &NavPath) -> String {
    let segments = path.segments();
    let mut rendered = String::new();
    for (position, segment) in segments.iter().enumerate() {
        if position + 1 == segments.len() {
            rendered.push_str("<b>");
            rendered.push_str(format_synset(segment));
            rendered.push_str("</b>");
        } else {
            rendered.push_str(format_synset(segment));
            rendered.push_str("<b> > </b>");
        }
    }
    rendered
}
