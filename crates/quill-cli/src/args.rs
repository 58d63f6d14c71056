use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the quill binary.
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Doc-comment scaffolding for syntax-tree snapshots"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a doc-comment scaffold for the declaration at a position.
    Scaffold(ScaffoldArgs),
    /// Dump the ancestor chain of the node at an offset.
    Trace(TraceArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScaffoldArgs {
    /// Path to a JSON-serialized syntax-tree snapshot.
    #[arg(long)]
    pub tree: PathBuf,

    /// Byte offset of the caret.
    #[arg(long, conflicts_with_all = ["line", "character"])]
    pub offset: Option<u32>,

    /// Caret line, 0-indexed (with --character).
    #[arg(long, requires = "character")]
    pub line: Option<u32>,

    /// Caret character, 0-indexed UTF-16 units (with --line).
    #[arg(long, requires = "line")]
    pub character: Option<u32>,

    /// Name placed on the Author line; implies --author-tag.
    #[arg(long)]
    pub author: Option<String>,

    /// Emit an Author line.
    #[arg(long = "author-tag")]
    pub author_tag: bool,

    /// Suppress heritage and type-parameter lines.
    #[arg(long = "no-types")]
    pub no_types: bool,

    /// Print the result as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct TraceArgs {
    /// Path to a JSON-serialized syntax-tree snapshot.
    #[arg(long)]
    pub tree: PathBuf,

    /// Byte offset to trace.
    #[arg(long)]
    pub offset: u32,

    /// Print the entries as JSON instead of the indented dump.
    #[arg(long)]
    pub json: bool,
}
