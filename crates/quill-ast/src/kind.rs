//! The closed set of syntax kinds the engine distinguishes.
//!
//! Kind names follow TypeScript's `SyntaxKind` naming so that host-side
//! tree producers map one-to-one. Anything the engine never inspects can be
//! handed over as [`SyntaxKind::Unknown`] without losing navigability.

/// Kind tag for one syntax-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SyntaxKind {
    SourceFile,

    // Declarations
    ClassDeclaration,
    ClassExpression,
    InterfaceDeclaration,
    EnumDeclaration,
    EnumMember,
    PropertyDeclaration,
    PropertySignature,
    GetAccessor,
    SetAccessor,
    MethodDeclaration,
    MethodSignature,
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunction,
    Constructor,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    Parameter,
    TypeParameter,
    HeritageClause,
    ExpressionWithTypeArguments,

    // Expressions and statements
    Identifier,
    TypeReference,
    Block,
    ReturnStatement,
    ExpressionStatement,
    PropertyAssignment,
    BinaryExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    CallExpression,
    ObjectBindingPattern,
    ArrayBindingPattern,
    StringLiteral,
    NumericLiteral,

    // Modifier keywords
    ExportKeyword,
    DeclareKeyword,
    AbstractKeyword,
    PublicKeyword,
    ProtectedKeyword,
    PrivateKeyword,
    StaticKeyword,
    ReadonlyKeyword,
    AsyncKeyword,

    EqualsToken,
    Unknown,
}

impl SyntaxKind {
    /// Whether this kind is a modifier keyword token.
    pub fn is_modifier_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::ExportKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::AsyncKeyword
        )
    }

    /// Whether this kind introduces its own callable body.
    ///
    /// These kinds form the boundary for return-statement scans: a return
    /// inside a nested callable does not belong to the enclosing one.
    pub fn is_callable_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::MethodSignature
                | SyntaxKind::Constructor
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
        )
    }

    /// Whether this kind is a class declaration or class expression.
    pub fn is_class_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression
        )
    }
}
