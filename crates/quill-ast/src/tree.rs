//! Arena-backed syntax tree.
//!
//! Construction is bottom-up: children are created before their parent, and
//! every `add_*` method wires the children's parent links when the parent
//! node is pushed. After the source-file node is added the tree is a frozen
//! snapshot; everything else in the engine only reads it.

use std::sync::OnceLock;

use crate::kind::SyntaxKind;
use crate::node::{
    AccessorData, BinaryExprData, BlockData, ClassData, ConstructorData, EnumData, EnumMemberData,
    ExpressionStatementData, FunctionData, HeritageClauseData, HeritageRelation, HeritageTypeData,
    IdentifierData, InterfaceData, NodeData, NodeId, ObjectLiteralData, ParameterData,
    PropertyAssignmentData, PropertyData, ReturnData, SourceFileData, SyntaxNode, TextSpan,
    TypeParameterData, VariableDeclarationData, VariableDeclarationListData, VariableStatementData,
};
use crate::position::LineMap;

/// One parsed source file as an immutable node arena.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SyntaxTree {
    file_name: String,
    text: String,
    nodes: Vec<SyntaxNode>,
    root: NodeId,
    #[serde(skip)]
    line_map: OnceLock<LineMap>,
}

impl SyntaxTree {
    /// Create an empty tree over a source snapshot.
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> SyntaxTree {
        SyntaxTree {
            file_name: file_name.into(),
            text: text.into(),
            nodes: Vec::new(),
            root: NodeId::NONE,
            line_map: OnceLock::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by id.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        if id.is_none() {
            None
        } else {
            self.nodes.get(id.0 as usize)
        }
    }

    /// The node's source text; empty for out-of-range or torn spans.
    pub fn node_text(&self, id: NodeId) -> &str {
        let Some(node) = self.get(id) else { return "" };
        self.text
            .get(node.span.start as usize..node.span.end as usize)
            .unwrap_or("")
    }

    /// Parent id, `NONE` for the root or an invalid id.
    #[inline]
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).map_or(NodeId::NONE, |node| node.parent)
    }

    /// Children in source order; empty for an invalid id.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Identifier payload text, if `id` is an identifier.
    pub fn identifier_text(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.data {
            NodeData::Identifier(ident) => Some(&ident.text),
            _ => None,
        }
    }

    /// Resolve a name sub-node to text: identifier payload text when
    /// available, the node's source text otherwise (computed names,
    /// binding patterns). `None` when the name link is absent.
    pub fn name_text(&self, name: NodeId) -> Option<&str> {
        let node = self.get(name)?;
        match &node.data {
            NodeData::Identifier(ident) => Some(&ident.text),
            _ => Some(self.node_text(name)),
        }
    }

    /// Offset ↔ position table for this snapshot, built on first use.
    pub fn line_map(&self) -> &LineMap {
        self.line_map.get_or_init(|| LineMap::build(&self.text))
    }

    fn push(
        &mut self,
        kind: SyntaxKind,
        span: TextSpan,
        children: Vec<NodeId>,
        data: NodeData,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for &child in &children {
            // Children always precede their parent in the arena.
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                node.parent = id;
            }
        }
        self.nodes.push(SyntaxNode {
            kind,
            span,
            parent: NodeId::NONE,
            children,
            data,
        });
        id
    }

    // =========================================================================
    // Node creation (bottom-up)
    // =========================================================================

    pub fn add_identifier(&mut self, text: impl Into<String>, span: TextSpan) -> NodeId {
        self.push(
            SyntaxKind::Identifier,
            span,
            Vec::new(),
            NodeData::Identifier(IdentifierData { text: text.into() }),
        )
    }

    /// Keyword, punctuation, literal, or pattern token.
    pub fn add_token(&mut self, kind: SyntaxKind, span: TextSpan) -> NodeId {
        self.push(kind, span, Vec::new(), NodeData::Token)
    }

    /// Type annotation or type argument, rendered from source text.
    pub fn add_type_reference(&mut self, span: TextSpan) -> NodeId {
        self.push(SyntaxKind::TypeReference, span, Vec::new(), NodeData::Token)
    }

    /// Opaque expression node (call, property access, …): navigable
    /// children, no payload.
    pub fn add_expression(
        &mut self,
        kind: SyntaxKind,
        children: Vec<NodeId>,
        span: TextSpan,
    ) -> NodeId {
        self.push(kind, span, children, NodeData::Token)
    }

    pub fn add_parameter(&mut self, span: TextSpan, data: ParameterData) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.name);
        push_child(&mut children, data.type_annotation);
        self.push(SyntaxKind::Parameter, span, children, NodeData::Parameter(data))
    }

    pub fn add_type_parameter(&mut self, span: TextSpan, data: TypeParameterData) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.name);
        self.push(
            SyntaxKind::TypeParameter,
            span,
            children,
            NodeData::TypeParameter(data),
        )
    }

    pub fn add_heritage_type(&mut self, span: TextSpan, data: HeritageTypeData) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.expression);
        children.extend_from_slice(&data.type_arguments);
        self.push(
            SyntaxKind::ExpressionWithTypeArguments,
            span,
            children,
            NodeData::HeritageType(data),
        )
    }

    pub fn add_heritage_clause(
        &mut self,
        relation: HeritageRelation,
        types: Vec<NodeId>,
        span: TextSpan,
    ) -> NodeId {
        let children = types.clone();
        self.push(
            SyntaxKind::HeritageClause,
            span,
            children,
            NodeData::HeritageClause(HeritageClauseData { relation, types }),
        )
    }

    /// `kind` is `ClassDeclaration` or `ClassExpression`.
    pub fn add_class(&mut self, kind: SyntaxKind, span: TextSpan, data: ClassData) -> NodeId {
        debug_assert!(kind.is_class_like());
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.name);
        children.extend_from_slice(&data.type_parameters);
        children.extend_from_slice(&data.heritage_clauses);
        children.extend_from_slice(&data.members);
        self.push(kind, span, children, NodeData::Class(data))
    }

    pub fn add_interface(&mut self, span: TextSpan, data: InterfaceData) -> NodeId {
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.name);
        children.extend_from_slice(&data.type_parameters);
        children.extend_from_slice(&data.heritage_clauses);
        children.extend_from_slice(&data.members);
        self.push(
            SyntaxKind::InterfaceDeclaration,
            span,
            children,
            NodeData::Interface(data),
        )
    }

    pub fn add_enum(&mut self, span: TextSpan, data: EnumData) -> NodeId {
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.name);
        children.extend_from_slice(&data.members);
        self.push(SyntaxKind::EnumDeclaration, span, children, NodeData::Enum(data))
    }

    pub fn add_enum_member(&mut self, span: TextSpan, data: EnumMemberData) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.name);
        push_child(&mut children, data.initializer);
        self.push(SyntaxKind::EnumMember, span, children, NodeData::EnumMember(data))
    }

    /// `kind` is `PropertyDeclaration` or `PropertySignature`.
    pub fn add_property(&mut self, kind: SyntaxKind, span: TextSpan, data: PropertyData) -> NodeId {
        debug_assert!(matches!(
            kind,
            SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature
        ));
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.name);
        push_child(&mut children, data.type_annotation);
        push_child(&mut children, data.initializer);
        self.push(kind, span, children, NodeData::Property(data))
    }

    /// `kind` is `GetAccessor` or `SetAccessor`.
    pub fn add_accessor(&mut self, kind: SyntaxKind, span: TextSpan, data: AccessorData) -> NodeId {
        debug_assert!(matches!(
            kind,
            SyntaxKind::GetAccessor | SyntaxKind::SetAccessor
        ));
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.name);
        children.extend_from_slice(&data.parameters);
        push_child(&mut children, data.body);
        self.push(kind, span, children, NodeData::Accessor(data))
    }

    /// `kind` is any of the function-shaped kinds: declaration, method,
    /// signature, function expression, or arrow function.
    pub fn add_function(&mut self, kind: SyntaxKind, span: TextSpan, data: FunctionData) -> NodeId {
        debug_assert!(kind.is_callable_like());
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.name);
        children.extend_from_slice(&data.type_parameters);
        children.extend_from_slice(&data.parameters);
        push_child(&mut children, data.return_type);
        push_child(&mut children, data.body);
        self.push(kind, span, children, NodeData::Function(data))
    }

    pub fn add_constructor(&mut self, span: TextSpan, data: ConstructorData) -> NodeId {
        let mut children = data.modifiers.clone();
        children.extend_from_slice(&data.parameters);
        push_child(&mut children, data.body);
        self.push(
            SyntaxKind::Constructor,
            span,
            children,
            NodeData::Constructor(data),
        )
    }

    pub fn add_variable_statement(
        &mut self,
        span: TextSpan,
        data: VariableStatementData,
    ) -> NodeId {
        let mut children = data.modifiers.clone();
        push_child(&mut children, data.declaration_list);
        self.push(
            SyntaxKind::VariableStatement,
            span,
            children,
            NodeData::VariableStatement(data),
        )
    }

    pub fn add_variable_declaration_list(
        &mut self,
        span: TextSpan,
        data: VariableDeclarationListData,
    ) -> NodeId {
        let children = data.declarations.clone();
        self.push(
            SyntaxKind::VariableDeclarationList,
            span,
            children,
            NodeData::VariableDeclarationList(data),
        )
    }

    pub fn add_variable_declaration(
        &mut self,
        span: TextSpan,
        data: VariableDeclarationData,
    ) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.name);
        push_child(&mut children, data.type_annotation);
        push_child(&mut children, data.initializer);
        self.push(
            SyntaxKind::VariableDeclaration,
            span,
            children,
            NodeData::VariableDeclaration(data),
        )
    }

    pub fn add_property_assignment(
        &mut self,
        span: TextSpan,
        data: PropertyAssignmentData,
    ) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.name);
        push_child(&mut children, data.initializer);
        self.push(
            SyntaxKind::PropertyAssignment,
            span,
            children,
            NodeData::PropertyAssignment(data),
        )
    }

    pub fn add_binary_expr(&mut self, span: TextSpan, data: BinaryExprData) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.left);
        push_child(&mut children, data.right);
        self.push(
            SyntaxKind::BinaryExpression,
            span,
            children,
            NodeData::BinaryExpr(data),
        )
    }

    pub fn add_object_literal(&mut self, span: TextSpan, data: ObjectLiteralData) -> NodeId {
        let children = data.properties.clone();
        self.push(
            SyntaxKind::ObjectLiteralExpression,
            span,
            children,
            NodeData::ObjectLiteral(data),
        )
    }

    pub fn add_block(&mut self, span: TextSpan, data: BlockData) -> NodeId {
        let children = data.statements.clone();
        self.push(SyntaxKind::Block, span, children, NodeData::Block(data))
    }

    pub fn add_return(&mut self, span: TextSpan, data: ReturnData) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.expression);
        self.push(
            SyntaxKind::ReturnStatement,
            span,
            children,
            NodeData::Return(data),
        )
    }

    pub fn add_expression_statement(
        &mut self,
        span: TextSpan,
        data: ExpressionStatementData,
    ) -> NodeId {
        let mut children = Vec::new();
        push_child(&mut children, data.expression);
        self.push(
            SyntaxKind::ExpressionStatement,
            span,
            children,
            NodeData::ExpressionStatement(data),
        )
    }

    /// Add the root node and freeze the snapshot.
    pub fn add_source_file(&mut self, span: TextSpan, data: SourceFileData) -> NodeId {
        let children = data.statements.clone();
        let id = self.push(
            SyntaxKind::SourceFile,
            span,
            children,
            NodeData::SourceFile(data),
        );
        self.root = id;
        id
    }
}

#[inline]
fn push_child(children: &mut Vec<NodeId>, id: NodeId) {
    if id.is_some() {
        children.push(id);
    }
}
