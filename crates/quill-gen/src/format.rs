//! Type-name formatting seam.
//!
//! Heritage type names pass through a host-pluggable pure string transform
//! before they are appended. The default keeps the rendered name intact
//! apart from whitespace normalization, so `Baz<string>` stays `Baz<string>`
//! and a multi-line source rendering collapses to one line.

/// Pure transform applied to rendered heritage type names.
pub trait TypeNameFormatter {
    fn format_type_name(&self, raw: &str) -> String;
}

/// Whitespace-normalizing default formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeFormatter;

impl TypeNameFormatter for DefaultTypeFormatter {
    fn format_type_name(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut pending_space = false;
        for ch in raw.trim().chars() {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
        out
    }
}
