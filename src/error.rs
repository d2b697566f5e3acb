//! Unified error type for lcdmenu.
//!
//! We avoid `alloc` - all error variants are fieldless and `Copy`.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Errors returned by menu tree operations.
///
/// Boundary navigation (no sibling, no parent, no submenu) is never an
/// error; those actions are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The handle does not resolve to any node of this menu.
    NotFound,

    /// The node arena is full. The tree is left untouched.
    AllocationFailure,

    /// Children cannot be added under a value entry.
    NotABranch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => f.write_str("node not found"),
            Error::AllocationFailure => f.write_str("menu node capacity exhausted"),
            Error::NotABranch => f.write_str("value entries cannot have children"),
        }
    }
}
