//! Node arena: insertion and handle resolution.
//!
//! All nodes live in one fixed-capacity `heapless::Vec`. Slot 0 holds the
//! root sentinel; every other slot is a node created by `add_menu` or
//! `add_value`. Nodes are never removed, so an index handed out once keeps
//! pointing at the same node until the whole arena is dropped.

use heapless::Vec;

use super::node::{Node, NodeId, NodeKind};
use super::value::ValueSource;
use crate::error::Error;

pub(crate) struct Tree<'a, const N: usize> {
    nodes: Vec<Node<'a>, N>,
}

impl<'a, const N: usize> Tree<'a, N> {
    const HAS_ROOT_SLOT: () = assert!(N >= 1, "menu arena needs a slot for the root");
    const FITS_HANDLES: () = assert!(
        N <= NodeId::SLOTS,
        "menu arena larger than the handle space"
    );

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_ROOT_SLOT;
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_HANDLES;

        let mut nodes = Vec::new();
        let _ = nodes.push(Node::root());
        Self { nodes }
    }

    /// Number of nodes, excluding the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    fn free_slots(&self) -> usize {
        N - self.nodes.len()
    }

    /// Look a handle up. Direct indexed access; fails with `NotFound`.
    pub fn resolve(&self, id: NodeId) -> Result<&Node<'a>, Error> {
        self.nodes.get(id.index()).ok_or(Error::NotFound)
    }

    pub fn resolve_mut(&mut self, id: NodeId) -> Result<&mut Node<'a>, Error> {
        self.nodes.get_mut(id.index()).ok_or(Error::NotFound)
    }

    /// First top-level entry, if any.
    pub fn first_top_level(&self) -> Option<NodeId> {
        self.nodes[NodeId::ROOT.index()].submenu
    }

    /// Iterate a sibling chain starting at `first`.
    pub fn siblings(&self, first: Option<NodeId>) -> Siblings<'_, 'a, N> {
        Siblings {
            tree: self,
            cursor: first,
        }
    }

    /// Append a branch under `parent` (root if `None`).
    pub fn add_menu(&mut self, parent: Option<NodeId>, title: &str) -> Result<NodeId, Error> {
        let parent = self.branch_for(parent)?;
        self.append(parent, Node::new(title, NodeKind::Branch))
    }

    /// Append a value entry under `parent` together with its value view.
    ///
    /// Needs two free slots; checked up front so a full arena never leaves
    /// an entry without its view.
    pub fn add_value(
        &mut self,
        parent: Option<NodeId>,
        title: &str,
        source: ValueSource<'a>,
    ) -> Result<NodeId, Error> {
        let parent = self.branch_for(parent)?;
        if self.free_slots() < 2 {
            return Err(Error::AllocationFailure);
        }
        let entry = self.append(parent, Node::new(title, NodeKind::ValueEntry))?;
        self.append(entry, Node::new(title, NodeKind::Value(source)))?;
        Ok(entry)
    }

    fn branch_for(&self, parent: Option<NodeId>) -> Result<NodeId, Error> {
        let Some(id) = parent else {
            return Ok(NodeId::ROOT);
        };
        match self.resolve(id)?.kind {
            NodeKind::Branch => Ok(id),
            NodeKind::ValueEntry | NodeKind::Value(_) => Err(Error::NotABranch),
        }
    }

    /// Push `node` and link it at the tail of `parent`'s children.
    fn append(&mut self, parent: NodeId, mut node: Node<'a>) -> Result<NodeId, Error> {
        let id = NodeId::try_from_index(self.nodes.len()).ok_or(Error::AllocationFailure)?;
        let tail = self.siblings(self.nodes[parent.index()].submenu).last();

        node.parent = Some(parent);
        node.previous = tail;
        self.nodes
            .push(node)
            .map_err(|_| Error::AllocationFailure)?;

        match tail {
            Some(tail) => self.nodes[tail.index()].next = Some(id),
            None => self.nodes[parent.index()].submenu = Some(id),
        }
        Ok(id)
    }
}

/// Iterator over a sibling chain, following `next` links.
pub struct Siblings<'t, 'a, const N: usize> {
    tree: &'t Tree<'a, N>,
    cursor: Option<NodeId>,
}

impl<const N: usize> Iterator for Siblings<'_, '_, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.cursor?;
        self.cursor = self.tree.nodes[current.index()].next;
        Some(current)
    }
}
