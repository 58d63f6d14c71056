//! Declaration locator.
//!
//! Resolves the node at the caret to the declaration that should receive
//! documentation: the node itself when its kind is documentable, otherwise
//! the nearest documentable ancestor.

use quill_ast::{NodeId, SyntaxKind, SyntaxTree};

/// The closed set of kinds the kind emitters know how to document.
///
/// `VariableDeclarationList` is included so a caret on the binding keyword
/// of `const f = function () {}` still resolves; its emitter delegates to
/// the declarations inside it.
pub(crate) fn is_documentable(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ClassDeclaration
            | SyntaxKind::ClassExpression
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::EnumMember
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::Constructor
            | SyntaxKind::VariableDeclaration
            | SyntaxKind::VariableDeclarationList
    )
}

/// Resolve `innermost` to a documentable declaration, or `None` when
/// neither it nor any ancestor qualifies.
pub fn locate_documentable(tree: &SyntaxTree, innermost: NodeId) -> Option<NodeId> {
    let node = tree.get(innermost)?;
    if is_documentable(node.kind) {
        return Some(innermost);
    }

    let mut current = node.parent;
    while current.is_some() {
        let ancestor = tree.get(current)?;
        if is_documentable(ancestor.kind) {
            tracing::trace!(kind = ?ancestor.kind, "caret resolved to enclosing declaration");
            return Some(current);
        }
        current = ancestor.parent;
    }
    None
}
