//! Ancestor-chain diagnostic dump.
//!
//! Debugging aid for host-produced tree snapshots, independent of the
//! scaffolding contract: resolve the node at an offset and report it plus
//! every ancestor up to the root, innermost first.

use quill_ast::{SyntaxTree, TextSpan};

/// One node on the ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TraceEntry {
    /// Kind name as spelled in [`quill_ast::SyntaxKind`].
    pub kind: String,
    pub span: TextSpan,
    /// Full source text of the node.
    pub text: String,
    /// Index within the parent's children; `None` for the root.
    pub child_index: Option<usize>,
}

/// Collect the ancestor chain of the node at `offset`, innermost first.
pub fn ancestor_trace(tree: &SyntaxTree, offset: u32) -> Vec<TraceEntry> {
    let mut entries = Vec::new();
    let mut current = tree.innermost_at(offset);
    while current.is_some() {
        let Some(node) = tree.get(current) else {
            break;
        };
        let child_index = if node.parent.is_some() {
            tree.children(node.parent)
                .iter()
                .position(|&child| child == current)
        } else {
            None
        };
        entries.push(TraceEntry {
            kind: format!("{:?}", node.kind),
            span: node.span,
            text: tree.node_text(current).to_string(),
            child_index,
        });
        current = node.parent;
    }
    entries
}

const TRACE_TEXT_LIMIT: usize = 40;

/// Render the chain as an indented, human-readable dump.
pub fn format_trace(entries: &[TraceEntry]) -> String {
    let mut out = String::new();
    for (depth, entry) in entries.iter().enumerate() {
        let index = entry
            .child_index
            .map_or_else(|| String::from("root"), |i| format!("#{i}"));
        out.push_str(&format!(
            "{:indent$}{} [{}..{}] {} `{}`\n",
            "",
            entry.kind,
            entry.span.start,
            entry.span.end,
            index,
            clip(&entry.text),
            indent = depth * 2
        ));
    }
    out
}

/// Flatten line breaks and cap display length; the raw text stays intact
/// in the entry itself.
fn clip(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect();
    if flat.chars().count() <= TRACE_TEXT_LIMIT {
        flat
    } else {
        let mut out: String = flat.chars().take(TRACE_TEXT_LIMIT).collect();
        out.push_str("...");
        out
    }
}
