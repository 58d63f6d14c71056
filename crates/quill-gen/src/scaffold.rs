//! Doc-comment provider and per-kind emitters.
//!
//! Dispatch is a closed match over the node payload: each documentable
//! shape has one emitter that writes its section lines through the
//! [`TextBuilder`] and reports the anchor node the rendered block belongs
//! to. Emitters decide whether they apply before writing anything, so a
//! skipped emitter leaves the builder untouched and the failure surfaces
//! as a clean "nothing to document" result.

use quill_ast::{
    ClassData, ConstructorData, EnumData, FunctionData, InterfaceData, NodeData, NodeId, Position,
    SyntaxKind, SyntaxTree,
};

use crate::builder::{PlaceholderLocation, TextBuilder};
use crate::error::ScaffoldError;
use crate::format::{DefaultTypeFormatter, TypeNameFormatter};
use crate::locate::locate_documentable;
use crate::options::DocOptions;

/// A rendered comment-block scaffold.
///
/// `snippet` carries the block body with `$n` / `${n:default}` markers;
/// the caller wraps it in comment delimiters and inserts it at `anchor`
/// (column 0 of the anchored declaration's first line).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocComment {
    pub snippet: String,
    pub anchor: Position,
    pub placeholders: Vec<PlaceholderLocation>,
}

/// Scaffolding provider over one tree snapshot.
pub struct DocCommentProvider<'a> {
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) options: &'a DocOptions,
    pub(crate) formatter: &'a dyn TypeNameFormatter,
}

impl<'a> DocCommentProvider<'a> {
    /// Create a provider with the default type-name formatter.
    pub fn new(tree: &'a SyntaxTree, options: &'a DocOptions) -> Self {
        DocCommentProvider {
            tree,
            options,
            formatter: &DefaultTypeFormatter,
        }
    }

    /// Create a provider with a host-supplied type-name formatter.
    pub fn with_formatter(
        tree: &'a SyntaxTree,
        options: &'a DocOptions,
        formatter: &'a dyn TypeNameFormatter,
    ) -> Self {
        DocCommentProvider {
            tree,
            options,
            formatter,
        }
    }

    /// Scaffold for the declaration at a line/character position.
    pub fn scaffold_at_position(&self, position: Position) -> Result<DocComment, ScaffoldError> {
        let offset = self
            .tree
            .line_map()
            .position_to_offset(position, self.tree.text())
            .ok_or(ScaffoldError::PositionOutOfRange {
                line: position.line,
            })?;
        self.scaffold_at_offset(offset)
    }

    /// Scaffold for the declaration at a byte offset.
    pub fn scaffold_at_offset(&self, offset: u32) -> Result<DocComment, ScaffoldError> {
        let len = self.tree.text().len();
        if offset as usize > len {
            return Err(ScaffoldError::OffsetOutOfRange { offset, len });
        }

        let innermost = self.tree.innermost_at(offset);
        let target = locate_documentable(self.tree, innermost)
            .ok_or(ScaffoldError::NoDocumentableDeclaration)?;

        let mut builder = TextBuilder::new();
        let anchor_node = self
            .emit(target, &mut builder)
            .ok_or(ScaffoldError::NoDocumentableDeclaration)?;
        tracing::trace!(
            offset,
            kind = ?self.tree.get(target).map(|node| node.kind),
            "emitted doc scaffold"
        );

        let rendered = builder.render();
        Ok(DocComment {
            snippet: rendered.text,
            anchor: self.anchor_position(anchor_node),
            placeholders: rendered.placeholders,
        })
    }

    /// Column 0 of the anchor node's first line.
    fn anchor_position(&self, node: NodeId) -> Position {
        let start = self.tree.get(node).map_or(0, |n| n.span.start);
        let line = self
            .tree
            .line_map()
            .offset_to_position(start, self.tree.text())
            .line;
        Position::new(line, 0)
    }

    /// Dispatch to the emitter for `id`'s shape. Returns the anchor node
    /// on emission, `None` when the shape produces no output.
    fn emit(&self, id: NodeId, builder: &mut TextBuilder) -> Option<NodeId> {
        let node = self.tree.get(id)?;
        match &node.data {
            NodeData::Class(class) => {
                self.emit_class(class, builder);
                Some(id)
            }
            NodeData::Interface(interface) => {
                self.emit_interface(interface, builder);
                Some(id)
            }
            NodeData::Enum(decl) => {
                self.emit_enum(decl, builder);
                Some(id)
            }
            // Intentionally minimal: a blank line, no fillable slot.
            NodeData::EnumMember(_) => {
                builder.line_break();
                Some(id)
            }
            NodeData::Property(property) => {
                self.emit_property_like(property.name, &property.modifiers, false, builder);
                Some(id)
            }
            NodeData::Accessor(accessor) => {
                let readonly = node.kind == SyntaxKind::GetAccessor
                    && self.getter_lacks_setter(id, accessor.name);
                self.emit_property_like(accessor.name, &accessor.modifiers, readonly, builder);
                Some(id)
            }
            NodeData::Function(func) => match node.kind {
                SyntaxKind::FunctionExpression | SyntaxKind::ArrowFunction => {
                    self.emit_function_value(id, func, builder)
                }
                _ => {
                    self.emit_function(id, func, builder);
                    Some(id)
                }
            },
            NodeData::Constructor(ctor) => {
                self.emit_constructor(id, ctor, builder);
                Some(id)
            }
            NodeData::VariableDeclaration(_) | NodeData::VariableDeclarationList(_) => {
                // Delegate across the children until one shape emits;
                // covers `const f = function () {}` and friends.
                for &child in self.tree.children(id) {
                    if let Some(anchor) = self.emit(child, builder) {
                        return Some(anchor);
                    }
                }
                None
            }
            _ => None,
        }
    }

    fn emit_class(&self, class: &ClassData, builder: &mut TextBuilder) {
        if let Some(name) = self.tree.name_text(class.name) {
            builder.append("Class: ");
            builder.append_line(name);
        }
        self.emit_description(builder);
        self.emit_author(builder);
        self.emit_modifiers(&class.modifiers, builder);
        self.emit_heritage(&class.heritage_clauses, builder);
        self.emit_type_parameters(&class.type_parameters, builder);
    }

    fn emit_interface(&self, interface: &InterfaceData, builder: &mut TextBuilder) {
        self.emit_description(builder);
        self.emit_author(builder);
        self.emit_modifiers(&interface.modifiers, builder);
        match self.tree.name_text(interface.name) {
            Some(name) => {
                builder.append("@interface ");
                builder.append_line(name);
            }
            None => builder.append_line("@interface"),
        }
        self.emit_heritage(&interface.heritage_clauses, builder);
        self.emit_type_parameters(&interface.type_parameters, builder);
    }

    fn emit_enum(&self, decl: &EnumData, builder: &mut TextBuilder) {
        self.emit_description(builder);
        self.emit_modifiers(&decl.modifiers, builder);
        builder.append_line("@enum {number}");
    }

    /// Property declarations, property signatures, and accessors.
    fn emit_property_like(
        &self,
        name: NodeId,
        modifiers: &[NodeId],
        readonly: bool,
        builder: &mut TextBuilder,
    ) {
        if let Some(name) = self.tree.name_text(name) {
            builder.append("Property: ");
            builder.append_line(name);
        }
        self.emit_description(builder);
        if readonly {
            builder.append_line("@readonly");
        }
        self.emit_modifiers(modifiers, builder);
    }

    /// No setter with the getter's identifier among the direct members of
    /// the immediate parent. Accessors merged in from elsewhere are not
    /// seen; the lookup scope is intentionally this narrow.
    fn getter_lacks_setter(&self, getter: NodeId, name: NodeId) -> bool {
        let Some(getter_name) = self.tree.name_text(name) else {
            return false;
        };
        let parent = self.tree.parent(getter);
        let members: &[NodeId] = match self.tree.get(parent).map(|node| &node.data) {
            Some(NodeData::Class(class)) => &class.members,
            Some(NodeData::Interface(interface)) => &interface.members,
            _ => &[],
        };
        !members.iter().any(|&member| {
            let Some(node) = self.tree.get(member) else {
                return false;
            };
            node.kind == SyntaxKind::SetAccessor
                && matches!(
                    &node.data,
                    NodeData::Accessor(acc) if self.tree.name_text(acc.name) == Some(getter_name)
                )
        })
    }

    /// Function declarations, method declarations, and method signatures.
    fn emit_function(&self, id: NodeId, func: &FunctionData, builder: &mut TextBuilder) {
        if let Some(name) = self.tree.name_text(func.name) {
            builder.append("Function: ");
            builder.append_line(name);
        }
        self.emit_description(builder);
        self.emit_author(builder);
        self.emit_modifiers(&func.modifiers, builder);
        self.emit_type_parameters(&func.type_parameters, builder);
        self.emit_parameters(&func.parameters, builder);
        self.emit_returns(id, func, builder);
    }

    fn emit_constructor(&self, id: NodeId, ctor: &ConstructorData, builder: &mut TextBuilder) {
        let class = self.tree.first_ancestor_of_kind(
            id,
            &[SyntaxKind::ClassDeclaration, SyntaxKind::ClassExpression],
        );
        let class_name = class.and_then(|class_id| match &self.tree.get(class_id)?.data {
            NodeData::Class(data) => self.tree.name_text(data.name),
            _ => None,
        });
        // The fixed text fills the description role, pre-seeded so the
        // user can overwrite it in one keystroke.
        match class_name {
            Some(name) => builder.append_placeholder(&format!("Creates an instance of {name}.")),
            None => builder.append_placeholder("Creates an instance."),
        }
        builder.line_break();
        self.emit_author(builder);
        self.emit_parameters(&ctor.parameters, builder);
    }

    /// A function expression or arrow function used as a value. The
    /// comment belongs above the binding, not the inline expression, so
    /// the anchor is rewritten; an unrecognized parent shape emits
    /// nothing at all.
    fn emit_function_value(
        &self,
        id: NodeId,
        func: &FunctionData,
        builder: &mut TextBuilder,
    ) -> Option<NodeId> {
        let anchor = self.function_value_anchor(id)?;
        self.emit_description(builder);
        self.emit_type_parameters(&func.type_parameters, builder);
        self.emit_parameters(&func.parameters, builder);
        self.emit_returns(id, func, builder);
        Some(anchor)
    }

    fn function_value_anchor(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.tree.parent(id);
        if let Some(node) = self.tree.get(parent) {
            if matches!(
                node.kind,
                SyntaxKind::PropertyAssignment
                    | SyntaxKind::BinaryExpression
                    | SyntaxKind::PropertyDeclaration
            ) {
                return Some(parent);
            }
        }
        self.tree.first_ancestor_of_kind(
            id,
            &[
                SyntaxKind::VariableDeclaration,
                SyntaxKind::VariableDeclarationList,
            ],
        )
    }
}
