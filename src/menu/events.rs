//! Focus/select notifications.

use super::node::NodeId;

/// Navigation events a caller can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Focus moved onto the node.
    Focus,
    /// The node was selected and its submenu entered.
    Select,
}

/// Event callback; receives the node the event fired on.
pub type Listener<'a> = &'a dyn Fn(NodeId);

/// At most one listener per event kind, stored on the node.
#[derive(Clone, Copy, Default)]
pub(crate) struct Listeners<'a> {
    focus: Option<Listener<'a>>,
    select: Option<Listener<'a>>,
}

impl<'a> Listeners<'a> {
    /// Attach `listener`, replacing any previous one of the same kind.
    pub fn set(&mut self, kind: EventKind, listener: Listener<'a>) {
        match kind {
            EventKind::Focus => self.focus = Some(listener),
            EventKind::Select => self.select = Some(listener),
        }
    }

    pub fn dispatch(&self, kind: EventKind, node: NodeId) {
        let listener = match kind {
            EventKind::Focus => self.focus,
            EventKind::Select => self.select,
        };
        if let Some(listener) = listener {
            listener(node);
        }
    }
}
