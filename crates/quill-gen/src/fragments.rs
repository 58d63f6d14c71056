//! Shared fragment emitters used across the kind emitters.

use quill_ast::{FunctionData, HeritageRelation, HeritageTypeData, NodeData, NodeId, SyntaxKind};

use crate::builder::TextBuilder;
use crate::scaffold::DocCommentProvider;

impl DocCommentProvider<'_> {
    /// Free-form description slot: the first placeholder of every block
    /// that carries one.
    pub(crate) fn emit_description(&self, builder: &mut TextBuilder) {
        builder.append_tabstop();
        builder.line_break();
    }

    pub(crate) fn emit_author(&self, builder: &mut TextBuilder) {
        if !self.options.include_author_tag {
            return;
        }
        builder.append("Author: ");
        if !self.options.author_name.is_empty() {
            builder.append(&self.options.author_name);
            builder.append(" ");
        }
        builder.append_tabstop();
        builder.line_break();
    }

    /// One marker line per recognized modifier, in the declaration's own
    /// modifier order. Unrecognized modifier kinds are skipped silently.
    pub(crate) fn emit_modifiers(&self, modifiers: &[NodeId], builder: &mut TextBuilder) {
        for &modifier in modifiers {
            let Some(node) = self.tree.get(modifier) else {
                continue;
            };
            let marker = match node.kind {
                SyntaxKind::ExportKeyword => "@export",
                SyntaxKind::AbstractKeyword => "@abstract",
                SyntaxKind::ProtectedKeyword => "@protected",
                SyntaxKind::PrivateKeyword => "@private",
                SyntaxKind::StaticKeyword => "@static",
                _ => continue,
            };
            builder.append_line(marker);
        }
    }

    pub(crate) fn emit_type_parameters(&self, type_parameters: &[NodeId], builder: &mut TextBuilder) {
        if !self.options.include_types {
            return;
        }
        for &type_parameter in type_parameters {
            let Some(node) = self.tree.get(type_parameter) else {
                continue;
            };
            let NodeData::TypeParameter(data) = &node.data else {
                continue;
            };
            if let Some(name) = self.tree.name_text(data.name) {
                builder.append("@template ");
                builder.append_line(name);
            }
        }
    }

    /// `@extends` / `@implements` line per referenced type, with type
    /// arguments rendered inline and the result passed through the
    /// type-name formatting seam.
    pub(crate) fn emit_heritage(&self, clauses: &[NodeId], builder: &mut TextBuilder) {
        if !self.options.include_types {
            return;
        }
        for &clause_id in clauses {
            let Some(clause_node) = self.tree.get(clause_id) else {
                continue;
            };
            let NodeData::HeritageClause(clause) = &clause_node.data else {
                continue;
            };
            let tag = match clause.relation {
                HeritageRelation::Extends => "@extends",
                HeritageRelation::Implements => "@implements",
            };
            for &type_id in &clause.types {
                let Some(type_node) = self.tree.get(type_id) else {
                    continue;
                };
                let NodeData::HeritageType(heritage_type) = &type_node.data else {
                    continue;
                };
                let rendered = self.render_heritage_type(heritage_type);
                let formatted = self.formatter.format_type_name(&rendered);
                builder.append(tag);
                builder.append(" ");
                builder.append_line(&formatted);
            }
        }
    }

    fn render_heritage_type(&self, heritage_type: &HeritageTypeData) -> String {
        let mut rendered = self
            .tree
            .name_text(heritage_type.expression)
            .unwrap_or_default()
            .to_string();
        if !heritage_type.type_arguments.is_empty() {
            rendered.push('<');
            for (i, &argument) in heritage_type.type_arguments.iter().enumerate() {
                if i > 0 {
                    rendered.push_str(", ");
                }
                rendered.push_str(self.tree.node_text(argument));
            }
            rendered.push('>');
        }
        rendered
    }

    /// `Parameters:` section: nothing at all for zero parameters, one
    /// bulleted line with a fillable slot per parameter otherwise.
    /// Destructuring patterns keep their full source text as the name.
    pub(crate) fn emit_parameters(&self, parameters: &[NodeId], builder: &mut TextBuilder) {
        if parameters.is_empty() {
            return;
        }
        builder.append_line("Parameters:");
        for &parameter in parameters {
            let Some(node) = self.tree.get(parameter) else {
                continue;
            };
            let NodeData::Parameter(data) = &node.data else {
                continue;
            };
            let name = self.tree.name_text(data.name).unwrap_or_default();
            builder.append("- ");
            builder.append(name);
            builder.append(" - ");
            builder.append_tabstop();
            builder.line_break();
        }
    }

    pub(crate) fn emit_returns(
        &self,
        callable: NodeId,
        func: &FunctionData,
        builder: &mut TextBuilder,
    ) {
        if !self.should_emit_returns(callable, func) {
            return;
        }
        builder.append("Returns: ");
        builder.append_tabstop();
        builder.line_break();
    }

    /// A literal annotation other than the exact string `void` counts, and
    /// a direct return-with-value counts even without an annotation.
    /// `never` and `undefined` deliberately still trigger the section.
    fn should_emit_returns(&self, callable: NodeId, func: &FunctionData) -> bool {
        if func.return_type.is_some() && self.tree.node_text(func.return_type) != "void" {
            return true;
        }
        self.tree.has_return_with_value(callable)
    }
}
