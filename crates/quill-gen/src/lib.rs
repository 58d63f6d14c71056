//! Doc-comment scaffolding engine.
//!
//! Given a [`quill_ast::SyntaxTree`] snapshot and a caret location, the
//! engine resolves the nearest documentable declaration and emits a
//! comment-block scaffold: literal section lines plus numbered snippet
//! placeholders (`$n`, `${n:default}`) for the user to fill in, along with
//! the position the block should be inserted at. The caller owns comment
//! delimiters, insertion, and placeholder-tabbing UI.
//!
//! A second, independent entry point ([`trace::ancestor_trace`]) dumps the
//! ancestor chain of the node at an offset for debugging tree snapshots.

pub mod builder;
pub mod error;
pub mod format;
pub mod locate;
pub mod options;
pub mod scaffold;
pub mod trace;

mod fragments;

pub use builder::{PlaceholderLocation, Rendered, TextBuilder};
pub use error::ScaffoldError;
pub use format::{DefaultTypeFormatter, TypeNameFormatter};
pub use locate::locate_documentable;
pub use options::DocOptions;
pub use scaffold::{DocComment, DocCommentProvider};
pub use trace::{TraceEntry, ancestor_trace, format_trace};
