//! Shared fixture helpers for the engine test suites.
#![allow(dead_code)]

use quill_ast::{FunctionData, NodeId, TextSpan};

/// Span of the first occurrence of `needle` in `src`.
pub fn span_of(src: &str, needle: &str) -> TextSpan {
    let start = src.find(needle).expect("needle present") as u32;
    TextSpan::new(start, start + needle.len() as u32)
}

/// Span of the last occurrence of `needle` in `src`.
pub fn span_of_last(src: &str, needle: &str) -> TextSpan {
    let start = src.rfind(needle).expect("needle present") as u32;
    TextSpan::new(start, start + needle.len() as u32)
}

/// Single-character span starting where `needle` begins, offset by `skip`.
pub fn char_span(src: &str, needle: &str, skip: u32) -> TextSpan {
    let start = src.find(needle).expect("needle present") as u32 + skip;
    TextSpan::new(start, start + 1)
}

/// Modifier-free `FunctionData`.
pub fn function_data(
    name: NodeId,
    parameters: Vec<NodeId>,
    return_type: NodeId,
    body: NodeId,
) -> FunctionData {
    FunctionData {
        name,
        modifiers: vec![],
        type_parameters: vec![],
        parameters,
        return_type,
        body,
    }
}
