//! quill CLI.
//!
//! Operates on JSON-serialized [`SyntaxTree`] snapshots produced by a host
//! (an editor extension or a test harness). `scaffold` prints the snippet
//! and anchor for the declaration at a position; `trace` prints the
//! ancestor chain of the node at an offset.
//!
//! Logging is off unless `QUILL_LOG` is set (e.g. `QUILL_LOG=trace`), so
//! normal runs carry no subscriber overhead.

mod args;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use quill_ast::{Position, SyntaxTree};
use quill_gen::{DocCommentProvider, DocOptions, ancestor_trace, format_trace};

use crate::args::{CliArgs, Command, ScaffoldArgs, TraceArgs};

fn main() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse();
    match args.command {
        Command::Scaffold(scaffold) => run_scaffold(scaffold),
        Command::Trace(trace) => run_trace(trace),
    }
}

/// Install the fmt subscriber only when `QUILL_LOG` asks for it.
fn init_tracing() {
    let Ok(filter) = std::env::var("QUILL_LOG") else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_tree(path: &Path) -> Result<SyntaxTree> {
    let payload = fs::read_to_string(path)
        .with_context(|| format!("reading tree snapshot {}", path.display()))?;
    let tree: SyntaxTree = serde_json::from_str(&payload)
        .with_context(|| format!("parsing tree snapshot {}", path.display()))?;
    tracing::debug!(
        file = tree.file_name(),
        nodes = tree.node_count(),
        "loaded tree snapshot"
    );
    Ok(tree)
}

fn run_scaffold(args: ScaffoldArgs) -> Result<()> {
    let tree = load_tree(&args.tree)?;
    let options = DocOptions {
        include_types: !args.no_types,
        include_author_tag: args.author_tag || args.author.is_some(),
        author_name: args.author.unwrap_or_default(),
    };
    let provider = DocCommentProvider::new(&tree, &options);

    let result = match (args.offset, args.line, args.character) {
        (Some(offset), _, _) => provider.scaffold_at_offset(offset),
        (None, Some(line), Some(character)) => {
            provider.scaffold_at_position(Position::new(line, character))
        }
        _ => bail!("pass --offset, or --line together with --character"),
    };
    let comment = result.context("`quill scaffold` could not produce a documentation scaffold")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!(
            "anchor: line {}, character {}",
            comment.anchor.line, comment.anchor.character
        );
        print!("{}", comment.snippet);
    }
    Ok(())
}

fn run_trace(args: TraceArgs) -> Result<()> {
    let tree = load_tree(&args.tree)?;
    let entries = ancestor_trace(&tree, args.offset);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format_trace(&entries));
    }
    Ok(())
}
