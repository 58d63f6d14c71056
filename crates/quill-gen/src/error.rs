//! Engine error taxonomy.
//!
//! Every failure is local to one invocation and recoverable; nothing is
//! rendered until emission succeeds, so there is never partial output.

/// Why a scaffolding invocation produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaffoldError {
    /// Neither the node at the caret nor any of its ancestors is a
    /// documentable declaration. Also covers a function expression in an
    /// unsupported parent shape.
    #[error("no documentable declaration at the current position")]
    NoDocumentableDeclaration,

    /// The caller's offset lies past the end of the source snapshot.
    #[error("offset {offset} is past the end of the source snapshot ({len} bytes)")]
    OffsetOutOfRange { offset: u32, len: usize },

    /// The caller's line/character position does not exist in the snapshot.
    #[error("line {line} does not exist in the source snapshot")]
    PositionOutOfRange { line: u32 },
}
