//! Syntax-tree snapshots for the quill doc-comment scaffolding engine.
//!
//! A [`SyntaxTree`] is a read-only, arena-backed snapshot of one parsed
//! source file, produced by a host (an editor's language-analysis service)
//! and handed to the engine per invocation. This crate provides:
//! - the closed [`SyntaxKind`] set and per-shape node payloads
//! - bottom-up `add_*` tree construction for hosts and tests
//! - offset ↔ line/character conversion via [`LineMap`]
//! - the read-only navigation queries the engine is built on
//!
//! Parsing source text is a host concern; nothing in this crate mutates a
//! tree after construction.

pub mod kind;
pub mod navigate;
pub mod node;
pub mod position;
pub mod tree;

pub use kind::SyntaxKind;
pub use node::{
    AccessorData, BinaryExprData, BlockData, ClassData, ConstructorData, EnumData, EnumMemberData,
    ExpressionStatementData, FunctionData, HeritageClauseData, HeritageRelation, HeritageTypeData,
    IdentifierData, InterfaceData, NodeData, NodeId, ObjectLiteralData, ParameterData,
    PropertyAssignmentData, PropertyData, ReturnData, SourceFileData, SyntaxNode, TextSpan,
    TypeParameterData, VariableDeclarationData, VariableDeclarationListData, VariableStatementData,
};
pub use position::{LineMap, Position};
pub use tree::SyntaxTree;
