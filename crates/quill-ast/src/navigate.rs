//! Read-only navigation queries over a [`SyntaxTree`].

use crate::kind::SyntaxKind;
use crate::node::{NodeData, NodeId};
use crate::tree::SyntaxTree;

impl SyntaxTree {
    /// The most deeply nested node whose span contains `offset`.
    ///
    /// Adjacent-span ties go to the later-declared child. Never fails: the
    /// worst case is the root itself (or `NONE` for a tree with no root).
    pub fn innermost_at(&self, offset: u32) -> NodeId {
        let mut current = self.root();
        'descend: while current.is_some() {
            for &child in self.children(current).iter().rev() {
                if let Some(node) = self.get(child) {
                    if node.span.contains_inclusive(offset) {
                        current = child;
                        continue 'descend;
                    }
                }
            }
            break;
        }
        tracing::trace!(offset, kind = ?self.get(current).map(|node| node.kind), "innermost_at");
        current
    }

    /// First node on the parent chain whose kind is in `kinds`.
    pub fn first_ancestor_of_kind(&self, node: NodeId, kinds: &[SyntaxKind]) -> Option<NodeId> {
        let mut current = self.parent(node);
        while current.is_some() {
            let ancestor = self.get(current)?;
            if kinds.contains(&ancestor.kind) {
                return Some(current);
            }
            current = ancestor.parent;
        }
        None
    }

    /// Depth-first pre-order search for a descendant of one of `kinds`.
    pub fn first_descendant_of_kind(&self, node: NodeId, kinds: &[SyntaxKind]) -> Option<NodeId> {
        for &child in self.children(node) {
            let Some(candidate) = self.get(child) else {
                continue;
            };
            if kinds.contains(&candidate.kind) {
                return Some(child);
            }
            if let Some(found) = self.first_descendant_of_kind(child, kinds) {
                return Some(found);
            }
        }
        None
    }

    /// Whether the callable's own body contains a `return` carrying an
    /// expression. Nested callables are not descended into; their returns
    /// belong to them.
    pub fn has_return_with_value(&self, callable: NodeId) -> bool {
        let body = match self.get(callable).map(|node| &node.data) {
            Some(NodeData::Function(func)) => func.body,
            Some(NodeData::Accessor(accessor)) => accessor.body,
            Some(NodeData::Constructor(ctor)) => ctor.body,
            _ => NodeId::NONE,
        };
        body.is_some() && self.scan_for_return_value(body)
    }

    fn scan_for_return_value(&self, node: NodeId) -> bool {
        for &child in self.children(node) {
            let Some(candidate) = self.get(child) else {
                continue;
            };
            if candidate.kind.is_callable_like() {
                continue;
            }
            if let NodeData::Return(ret) = &candidate.data {
                if ret.expression.is_some() {
                    return true;
                }
            }
            if self.scan_for_return_value(child) {
                return true;
            }
        }
        false
    }
}
