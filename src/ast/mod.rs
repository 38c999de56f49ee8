//! Document tree consumed by the renderers.
//!
//! The tree is produced upstream by a markdown parser. It uses a flat arena
//! of nodes linked parent / first-child / next-sibling, addressed by
//! [`NodeId`]. Renderers only read it.
//!
//! # Example
//!
//! ```
//! use quire::ast::{Document, NodeId, NodeKind};
//!
//! let mut doc = Document::new();
//! let para = doc.push(NodeId::ROOT, NodeKind::Paragraph);
//! doc.push(para, NodeKind::text("Hello"));
//!
//! assert_eq!(doc.children(NodeId::ROOT).count(), 1);
//! assert_eq!(doc.node(para).unwrap().kind, NodeKind::Paragraph);
//! ```

#[cfg(feature = "serde")]
mod json;
mod node;

pub use node::{Alignment, AutolinkKind, CellFlags, Node, NodeId, NodeKind};

/// A parsed document in arena form.
///
/// Index 0 is always the [`NodeKind::Root`] node.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root)],
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a detached node and return its ID.
    pub fn alloc_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind));
        id
    }

    /// Append a detached node to a parent, after any existing children.
    ///
    /// Returns `false` and leaves the tree unchanged when either id is not in
    /// the document, or when `child` is the root, already has a parent, or is
    /// an ancestor of `parent`. A node can be attached only once.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let (Some(parent_node), Some(child_node)) = (self.node(parent), self.node(child)) else {
            return false;
        };
        if child == NodeId::ROOT || child == parent || child_node.parent.is_some() {
            return false;
        }
        // Only a detached node with its own subtree can sit above `parent`
        if child_node.first_child.is_some() && self.is_ancestor(child, parent) {
            return false;
        }

        let last_child = parent_node.last_child;
        match last_child {
            Some(last) => self.nodes[last.0 as usize].next_sibling = Some(child),
            None => self.nodes[parent.0 as usize].first_child = Some(child),
        }
        self.nodes[parent.0 as usize].last_child = Some(child);
        self.nodes[child.0 as usize].parent = Some(parent);
        true
    }

    /// Whether `ancestor` lies on the parent chain of `id`.
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.node(id).and_then(|n| n.parent);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.node(node).and_then(|n| n.parent);
        }
        false
    }

    /// Allocate a node and append it to `parent` in one step.
    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.alloc_node(kind);
        self.append_child(parent, id);
        id
    }

    /// Iterate over children of a node in document order.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            doc: self,
            current: self.node(parent).and_then(|n| n.first_child),
        }
    }

    /// Iterate over all nodes in depth-first, left-to-right order.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        DfsIter {
            doc: self,
            stack: vec![NodeId::ROOT],
        }
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.doc.node(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over all nodes.
pub struct DfsIter<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for DfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let start = self.stack.len();
        self.stack.extend(self.doc.children(current));
        self.stack[start..].reverse();

        Some(current)
    }
}
