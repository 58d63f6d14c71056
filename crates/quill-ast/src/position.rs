//! Offset ↔ line/character conversion.
//!
//! Host editors speak line/character positions, the tree speaks byte
//! offsets. Characters are counted in UTF-16 code units to match editor
//! protocol conventions.

/// A position in a source file (0-indexed line and character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column in UTF-16 code units.
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Position {
        Position { line, character }
    }
}

/// Table of line-start offsets for one source snapshot.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    /// Starting offset of each line; `line_starts[0]` is always 0.
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build the table. `\n`, `\r\n`, and lone `\r` all terminate a line.
    pub fn build(source: &str) -> LineMap {
        let mut line_starts = vec![0u32];
        let bytes = source.as_bytes();
        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_starts.push((i + 1) as u32),
                // Lone \r ends a line; \r\n is handled by the \n branch.
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push((i + 1) as u32),
                _ => {}
            }
        }
        LineMap { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Starting offset of a line, if the line exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        self.line_starts.get(line as usize).copied()
    }

    /// Convert a byte offset to a line/character position.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let slice = source.get(line_start.min(end)..end).unwrap_or("");
        let character = slice.chars().map(|ch| ch.len_utf16() as u32).sum();

        Position {
            line: line as u32,
            character,
        }
    }

    /// Convert a line/character position to a byte offset. Returns `None`
    /// when the line does not exist in the snapshot.
    pub fn position_to_offset(&self, position: Position, source: &str) -> Option<u32> {
        let line_start = self.line_start(position.line)?;
        let line_end = self
            .line_start(position.line + 1)
            .unwrap_or(source.len() as u32);
        let slice = source
            .get(line_start as usize..line_end as usize)
            .unwrap_or("");

        let mut utf16_seen = 0u32;
        let mut bytes_seen = 0u32;
        for ch in slice.chars() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            let width = ch.len_utf16() as u32;
            // Never step past the requested column, even when it lands
            // between the two units of a surrogate pair.
            if utf16_seen + width > position.character {
                break;
            }
            utf16_seen += width;
            bytes_seen += ch.len_utf8() as u32;
        }

        Some(line_start + bytes_seen)
    }
}
