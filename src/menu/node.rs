//! Menu tree nodes and the handles that address them.

use heapless::String;

use super::events::Listeners;
use super::value::ValueSource;
use crate::config::TITLE_CAPACITY;

/// Fixed-capacity node title.
pub type Title = String<TITLE_CAPACITY>;

/// Opaque handle to a node of one [`Menu`](super::Menu).
///
/// Handles are arena indices: stable for the whole lifetime of the menu
/// that issued them, and only meaningful to that menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(u16);

impl NodeId {
    /// The sentinel root. Never issued to callers, never focused.
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Number of distinct handles, root included.
    pub(crate) const SLOTS: usize = u16::MAX as usize + 1;

    /// Handle for arena slot `index`, if it fits the handle width.
    pub(crate) fn try_from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(NodeId)
    }

    #[cfg(test)]
    pub(crate) const fn from_index(index: usize) -> Self {
        NodeId(index as u16)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node shows when it has focus.
#[derive(Clone, Copy)]
pub(crate) enum NodeKind<'a> {
    /// Plain entry; may hold a submenu.
    Branch,
    /// Visible entry of a value. Its submenu is exactly one `Value` node.
    ValueEntry,
    /// Auto-created value view carrying the live source.
    Value(ValueSource<'a>),
}

/// One element of the menu tree.
///
/// Links are arena indices: `submenu` and `next` point down/forward,
/// `parent` and `previous` point back. Shape is maintained by
/// the tree's insertion logic only.
pub struct Node<'a> {
    pub(crate) title: Title,
    pub(crate) kind: NodeKind<'a>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) submenu: Option<NodeId>,
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) listeners: Listeners<'a>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(title: &str, kind: NodeKind<'a>) -> Self {
        let mut t = Title::new();
        // Truncate title if too long.
        for c in title.chars() {
            if t.push(c).is_err() {
                break;
            }
        }
        Self {
            title: t,
            kind,
            parent: None,
            submenu: None,
            previous: None,
            next: None,
            listeners: Listeners::default(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::new("", NodeKind::Branch)
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Enclosing entry, or `None` for top-level entries.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent.filter(|p| *p != NodeId::ROOT)
    }

    /// First child, if any.
    pub fn submenu(&self) -> Option<NodeId> {
        self.submenu
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// `true` for value entries and for their value views.
    pub fn is_value(&self) -> bool {
        matches!(self.kind, NodeKind::ValueEntry | NodeKind::Value(_))
    }

    /// `true` only for the value view that renders title + live value.
    pub fn is_value_view(&self) -> bool {
        matches!(self.kind, NodeKind::Value(_))
    }

    pub(crate) fn source(&self) -> Option<ValueSource<'a>> {
        match self.kind {
            NodeKind::Value(source) => Some(source),
            _ => None,
        }
    }
}
