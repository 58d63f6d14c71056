//! Ordered-text builder with snippet placeholders.
//!
//! Emitters append literal fragments, line breaks, and fillable slots in
//! document order; `render` concatenates them left to right into snippet
//! text. Placeholder indices are assigned during rendering, in append
//! order — an emitter never needs to know how many slots precede it.

/// Byte location and metadata of one rendered placeholder.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlaceholderLocation {
    /// 1-based snippet tabstop index.
    pub index: u32,
    /// Byte offset of the marker within the rendered text.
    pub offset: usize,
    /// Pre-filled default text, if any.
    pub default: Option<String>,
}

/// Result of rendering a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Snippet text with `$n` / `${n:default}` markers.
    pub text: String,
    /// Placeholders in marker order.
    pub placeholders: Vec<PlaceholderLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    Text(String),
    LineBreak,
    Tabstop,
    Placeholder(String),
}

/// Accumulates comment-block fragments and renders them once.
#[derive(Debug, Default)]
pub struct TextBuilder {
    fragments: Vec<Fragment>,
}

impl TextBuilder {
    pub fn new() -> TextBuilder {
        TextBuilder::default()
    }

    /// Append literal text.
    pub fn append(&mut self, text: &str) {
        self.fragments.push(Fragment::Text(text.to_string()));
    }

    /// Append literal text followed by a line break.
    pub fn append_line(&mut self, text: &str) {
        self.append(text);
        self.line_break();
    }

    pub fn line_break(&mut self) {
        self.fragments.push(Fragment::LineBreak);
    }

    /// Append a plain fillable slot.
    pub fn append_tabstop(&mut self) {
        self.fragments.push(Fragment::Tabstop);
    }

    /// Append a fillable slot pre-filled with `default_text`.
    pub fn append_placeholder(&mut self, default_text: &str) {
        self.fragments
            .push(Fragment::Placeholder(default_text.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render the fragment sequence. Pure and idempotent: rendering the
    /// same builder twice yields byte-identical output.
    pub fn render(&self) -> Rendered {
        let mut text = String::new();
        let mut placeholders = Vec::new();
        let mut next_index = 1u32;

        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(literal) => escape_literal(literal, &mut text),
                Fragment::LineBreak => text.push('\n'),
                Fragment::Tabstop => {
                    let offset = text.len();
                    text.push('$');
                    text.push_str(&next_index.to_string());
                    placeholders.push(PlaceholderLocation {
                        index: next_index,
                        offset,
                        default: None,
                    });
                    next_index += 1;
                }
                Fragment::Placeholder(default) => {
                    let offset = text.len();
                    text.push_str("${");
                    text.push_str(&next_index.to_string());
                    text.push(':');
                    escape_default(default, &mut text);
                    text.push('}');
                    placeholders.push(PlaceholderLocation {
                        index: next_index,
                        offset,
                        default: Some(default.clone()),
                    });
                    next_index += 1;
                }
            }
        }

        Rendered { text, placeholders }
    }
}

/// Escape snippet metacharacters in top-level literal text. A lone `}`
/// outside `${…}` is already literal in the snippet grammar.
fn escape_literal(literal: &str, out: &mut String) {
    for ch in literal.chars() {
        if matches!(ch, '\\' | '$') {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Escape default text inside a `${n:…}` placeholder, where `}` would
/// close the marker early.
fn escape_default(literal: &str, out: &mut String) {
    for ch in literal.chars() {
        if matches!(ch, '\\' | '$' | '}') {
            out.push('\\');
        }
        out.push(ch);
    }
}
