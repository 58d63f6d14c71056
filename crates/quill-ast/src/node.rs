//! Node storage types: ids, spans, and per-shape payloads.
//!
//! Nodes live in a single vector owned by the tree; all relations between
//! nodes are `NodeId` indices. The parent link is a plain index set during
//! construction, so the tree stays free of owning cycles. The payload is a
//! closed tagged enum with one variant per shape the engine reads; shapes
//! the engine only navigates through carry no payload at all.

use crate::kind::SyntaxKind;

/// Index of a node within its tree, with a `NONE` sentinel for absent
/// relations (missing name, absent type annotation, parent of the root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == NodeId::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != NodeId::NONE
    }
}

/// Half-open byte range of a node in the source snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextSpan {
    pub start: u32,
    pub end: u32,
}

impl TextSpan {
    pub fn new(start: u32, end: u32) -> TextSpan {
        TextSpan { start, end }
    }

    /// Containment with inclusive ends, so a caret sitting on either
    /// boundary of a node still resolves to it.
    #[inline]
    pub fn contains_inclusive(self, offset: u32) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// One node of a [`crate::SyntaxTree`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: TextSpan,
    /// Non-owning back link; `NodeId::NONE` for the root.
    pub parent: NodeId,
    /// Children in source order.
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

/// Per-shape payload. Field sets carry exactly what the engine reads for
/// that shape; optional sub-nodes use the `NodeId::NONE` sentinel.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum NodeData {
    SourceFile(SourceFileData),
    Class(ClassData),
    Interface(InterfaceData),
    Enum(EnumData),
    EnumMember(EnumMemberData),
    Property(PropertyData),
    Accessor(AccessorData),
    Function(FunctionData),
    Constructor(ConstructorData),
    VariableStatement(VariableStatementData),
    VariableDeclarationList(VariableDeclarationListData),
    VariableDeclaration(VariableDeclarationData),
    Parameter(ParameterData),
    TypeParameter(TypeParameterData),
    HeritageClause(HeritageClauseData),
    HeritageType(HeritageTypeData),
    Identifier(IdentifierData),
    PropertyAssignment(PropertyAssignmentData),
    BinaryExpr(BinaryExprData),
    ObjectLiteral(ObjectLiteralData),
    Block(BlockData),
    Return(ReturnData),
    ExpressionStatement(ExpressionStatementData),
    /// Keyword, punctuation, literal, pattern, type text, or any opaque
    /// expression node: navigable, rendered from source text only.
    Token,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SourceFileData {
    pub statements: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClassData {
    /// `NONE` for anonymous class expressions.
    pub name: NodeId,
    pub modifiers: Vec<NodeId>,
    pub type_parameters: Vec<NodeId>,
    pub heritage_clauses: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InterfaceData {
    pub name: NodeId,
    pub modifiers: Vec<NodeId>,
    pub type_parameters: Vec<NodeId>,
    pub heritage_clauses: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EnumData {
    pub name: NodeId,
    pub modifiers: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EnumMemberData {
    pub name: NodeId,
    pub initializer: NodeId,
}

/// Property declarations and property signatures.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PropertyData {
    pub name: NodeId,
    pub modifiers: Vec<NodeId>,
    pub type_annotation: NodeId,
    pub initializer: NodeId,
}

/// Get and set accessors; the kind tag distinguishes the two.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AccessorData {
    pub name: NodeId,
    pub modifiers: Vec<NodeId>,
    pub parameters: Vec<NodeId>,
    pub body: NodeId,
}

/// Shared by function/method declarations, method signatures, function
/// expressions, and arrow functions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionData {
    pub name: NodeId,
    pub modifiers: Vec<NodeId>,
    pub type_parameters: Vec<NodeId>,
    pub parameters: Vec<NodeId>,
    pub return_type: NodeId,
    /// A block, or the expression of an expression-bodied arrow function.
    pub body: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConstructorData {
    pub modifiers: Vec<NodeId>,
    pub parameters: Vec<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VariableStatementData {
    pub modifiers: Vec<NodeId>,
    pub declaration_list: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VariableDeclarationListData {
    pub declarations: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeId,
    pub type_annotation: NodeId,
    pub initializer: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParameterData {
    /// Identifier or binding pattern; patterns render from source text.
    pub name: NodeId,
    pub type_annotation: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TypeParameterData {
    pub name: NodeId,
}

/// The relation a heritage clause expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HeritageRelation {
    Extends,
    Implements,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HeritageClauseData {
    pub relation: HeritageRelation,
    /// `ExpressionWithTypeArguments` nodes in declaration order.
    pub types: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HeritageTypeData {
    pub expression: NodeId,
    pub type_arguments: Vec<NodeId>,
}

/// Identifier payload carrying its text directly, so name lookups work
/// without consulting the source snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeId,
    pub initializer: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BinaryExprData {
    pub left: NodeId,
    pub operator: SyntaxKind,
    pub right: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObjectLiteralData {
    pub properties: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BlockData {
    pub statements: Vec<NodeId>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReturnData {
    /// `NONE` for a bare `return;`.
    pub expression: NodeId,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExpressionStatementData {
    pub expression: NodeId,
}
