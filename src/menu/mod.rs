//! Multi-level menu - tree, navigator and renderer.
//!
//! The menu owns all of its nodes in a fixed-capacity arena and keeps a
//! single focused node. Four navigation actions move the focus:
//!
//! - `up` / `down` - previous / next sibling
//! - `select` - enter the focused entry's submenu
//! - `back` - return to the enclosing entry
//!
//! Every action that moves the focus redraws once and then notifies the
//! focus listener. Every action, moving or not, then blocks for the
//! debounce interval to swallow contact bounce from the buttons.
//!
//! ## Value entries
//!
//! `add_value` creates a visible entry with one auto-created value view
//! below it. `select` on the entry opens the view, which shows the title on
//! row 0 and the live value on row 1; `back` returns to the entry.
//! `refresh_values` redraws an open view at most once per refresh interval.

pub mod events;
pub mod node;
mod render;
mod tree;
pub mod value;


use embedded_hal::delay::DelayNs;

pub use events::{EventKind, Listener};
pub use node::{Node, NodeId};
pub use render::Geometry;
pub use tree::Siblings;
pub use value::{ValueSource, ValueText};

use crate::config::{
    MenuConfig, FOCUS_GLYPH, FOCUS_GLYPH_INDEX, MAX_NODES, MAX_ROWS, SPLASH_DURATION_MS,
};
use crate::error::Error;
use crate::time::Clock;
use crate::ui::display::CharDisplay;
use tree::Tree;

/// A menu instance bound to one display and one timebase.
///
/// `N` is the arena capacity including the root sentinel. Value sources
/// and listeners are borrowed for `'a` and must outlive the menu.
pub struct Menu<'a, D, T, const N: usize = MAX_NODES>
where
    D: CharDisplay,
    T: DelayNs + Clock,
{
    tree: Tree<'a, N>,
    display: D,
    timebase: T,
    config: MenuConfig,
    geometry: Option<Geometry>,
    /// `None` only while there are no top-level entries. Never the root.
    focus: Option<NodeId>,
    last_refresh_ms: Option<u64>,
}

impl<'a, D, T, const N: usize> Menu<'a, D, T, N>
where
    D: CharDisplay,
    T: DelayNs + Clock,
{
    pub fn new(display: D, timebase: T) -> Self {
        Self::with_config(display, timebase, MenuConfig::default())
    }

    pub fn with_config(display: D, timebase: T, config: MenuConfig) -> Self {
        Self {
            tree: Tree::new(),
            display,
            timebase,
            config,
            geometry: None,
            focus: None,
            last_refresh_ms: None,
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Setup
    // ───────────────────────────────────────────────────────────────────────

    /// Fix the display geometry, register the focus glyph and draw.
    ///
    /// Geometry is set once; later calls only redraw.
    pub fn begin(&mut self, cols: u8, rows: u8) -> Result<(), D::Error> {
        if self.geometry.is_some() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Menu: begin called twice, keeping geometry");
            return self.draw();
        }

        self.display.register_glyph(FOCUS_GLYPH_INDEX, &FOCUS_GLYPH)?;
        let geometry = Geometry {
            cols,
            rows: rows.min(MAX_ROWS),
        };
        self.geometry = Some(geometry);

        #[cfg(feature = "defmt")]
        defmt::info!("Menu: {}x{} display", geometry.cols, geometry.rows);
        self.draw()
    }

    /// Show static lines for the default splash duration, then the menu.
    pub fn splash(&mut self, lines: &[&str]) -> Result<(), D::Error> {
        self.splash_for(lines, SPLASH_DURATION_MS)
    }

    /// Show up to `rows` static lines, block for `duration_ms`, then clear
    /// and draw the menu again.
    pub fn splash_for(&mut self, lines: &[&str], duration_ms: u32) -> Result<(), D::Error> {
        let Some(geometry) = self.geometry else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Menu: splash before begin, skipped");
            return Ok(());
        };

        #[cfg(feature = "defmt")]
        defmt::info!("Menu: splash for {} ms", duration_ms);
        render::splash(&mut self.display, lines, geometry)?;
        self.timebase.delay_ms(duration_ms);
        self.draw()
    }

    /// Append a branch entry under `parent` (top level if `None`).
    ///
    /// Does not move the focus, except that the very first top-level
    /// entry becomes the initial focus.
    pub fn add_menu(
        &mut self,
        parent: impl Into<Option<NodeId>>,
        title: &str,
    ) -> Result<NodeId, Error> {
        let id = self.tree.add_menu(parent.into(), title).inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Menu: add_menu rejected: {}", _e);
        })?;
        self.inserted(id);
        Ok(id)
    }

    /// Append a value entry under `parent` (top level if `None`).
    pub fn add_value(
        &mut self,
        parent: impl Into<Option<NodeId>>,
        title: &str,
        source: ValueSource<'a>,
    ) -> Result<NodeId, Error> {
        let id = self
            .tree
            .add_value(parent.into(), title, source)
            .inspect_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("Menu: add_value rejected: {}", _e);
            })?;
        self.inserted(id);
        Ok(id)
    }

    fn inserted(&mut self, _id: NodeId) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Menu: added {}", _id);
        if self.focus.is_none() {
            self.focus = self.tree.first_top_level();
        }
        self.redraw();
    }

    /// Attach `listener` to `kind` events of `node`, replacing any previous one.
    pub fn listen<F>(
        &mut self,
        kind: EventKind,
        node: NodeId,
        listener: &'a F,
    ) -> Result<(), Error>
    where
        F: Fn(NodeId),
    {
        self.tree.resolve_mut(node)?.listeners.set(kind, listener);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────────────

    /// Move to the previous sibling. Returns `true` if the focus moved.
    pub fn up(&mut self) -> bool {
        let target = self.focused_node().and_then(Node::previous);
        self.transition(target, None)
    }

    /// Move to the next sibling.
    pub fn down(&mut self) -> bool {
        let target = self.focused_node().and_then(Node::next);
        self.transition(target, None)
    }

    /// Enter the focused entry's submenu.
    pub fn select(&mut self) -> bool {
        let target = self.focused_node().and_then(Node::submenu);
        self.transition(target, self.focus)
    }

    /// Return to the enclosing entry. No-op at the top level.
    pub fn back(&mut self) -> bool {
        let target = self.focused_node().and_then(Node::parent);
        self.transition(target, None)
    }

    fn transition(&mut self, target: Option<NodeId>, selected: Option<NodeId>) -> bool {
        let moved = match target {
            Some(target) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Menu: focus {:?} -> {}", self.focus, target);
                self.focus = Some(target);
                self.redraw();
                if let Some(selected) = selected {
                    self.dispatch(EventKind::Select, selected);
                }
                self.dispatch(EventKind::Focus, target);
                true
            }
            None => false,
        };

        self.timebase.delay_ms(self.config.debounce_ms);
        moved
    }

    fn dispatch(&self, kind: EventKind, id: NodeId) {
        if let Ok(node) = self.tree.resolve(id) {
            node.listeners.dispatch(kind, id);
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Rendering
    // ───────────────────────────────────────────────────────────────────────

    /// Render the current page. Does nothing before `begin`.
    pub fn draw(&mut self) -> Result<(), D::Error> {
        let Some(geometry) = self.geometry else {
            return Ok(());
        };
        render::draw(&mut self.display, &self.tree, self.focus, geometry, &self.config)
    }

    /// Redraw an open value view, at most once per refresh interval.
    ///
    /// Meant to be called on every iteration of the control loop. Returns
    /// `true` if it redrew.
    pub fn refresh_values(&mut self) -> bool {
        let now = self.timebase.now_ms();
        if let Some(last) = self.last_refresh_ms {
            if now.saturating_sub(last) < self.config.refresh_interval_ms {
                return false;
            }
        }
        if !self.focused_node().is_some_and(Node::is_value_view) {
            return false;
        }

        self.last_refresh_ms = Some(now);
        self.redraw();
        true
    }

    /// Draw, logging instead of propagating display errors.
    fn redraw(&mut self) {
        if self.draw().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Menu: display error during redraw");
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Inspection
    // ───────────────────────────────────────────────────────────────────────

    /// Look a handle up.
    pub fn resolve(&self, id: NodeId) -> Result<&Node<'a>, Error> {
        self.tree.resolve(id)
    }

    /// Entries directly below `parent` (top level if `None`), in order.
    pub fn children(
        &self,
        parent: impl Into<Option<NodeId>>,
    ) -> Result<Siblings<'_, 'a, N>, Error> {
        let first = match parent.into() {
            Some(id) => self.tree.resolve(id)?.submenu(),
            None => self.tree.first_top_level(),
        };
        Ok(self.tree.siblings(first))
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focus
    }

    fn focused_node(&self) -> Option<&Node<'a>> {
        self.focus.and_then(|id| self.tree.resolve(id).ok())
    }

    /// Value of the open value view, if one is focused.
    pub fn current_value(&self) -> Option<ValueText> {
        let source = self.focused_node()?.source()?;
        let mut out = ValueText::new();
        value::resolve_value(Some(&source), &mut out);
        Some(out)
    }

    /// Number of nodes, including auto-created value views.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn timebase(&self) -> &T {
        &self.timebase
    }

    /// Tear the menu down, returning the display and timebase.
    pub fn release(self) -> (D, T) {
        (self.display, self.timebase)
    }
}
