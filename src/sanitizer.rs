use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Strips markup down to plain text: parses the fragment into a DOM, drops
/// `script`/`style` subtrees, joins the remaining text nodes with single
/// spaces, and collapses whitespace runs.
pub fn strip_markup(html: &str) -> String {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let mut out = String::new();
    collect_text(&dom.document, &mut out);
    collapse_whitespace(&out)
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => {
            let s = contents.borrow();
            let s = s.trim();
            if !s.is_empty() {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(s);
            }
        }
        NodeData::Element { name, .. } => {
            let local = &name.local;
            // Skip the whole subtree, not just the tag.
            if &**local == "script" || &**local == "style" {
                return;
            }
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// Collapses every internal whitespace run to a single space and trims the
/// ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character-wise prefix of `text`, at most `max_chars` long. Not
/// word-boundary aware; a cut can land mid-word.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
