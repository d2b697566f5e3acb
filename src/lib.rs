//! Multi-level menus for character displays.
//!
//! A [`Menu`] holds a tree of entries built once at startup and is driven
//! by four buttons (up / down / select / back). Leaf entries can show a
//! live value, read from a callback or from caller-owned text, refreshed
//! from the control loop.
//!
//! The library is `no_std` and allocation-free: nodes live in a
//! fixed-capacity `heapless` arena, displays are reached through the
//! [`ui::display::CharDisplay`] trait, delays through `embedded-hal`.
//!
//! Usage: `cargo test` runs everything on the host.
//!
//! Note: The embedded demo firmware lives in main.rs and needs
//! `--features embedded`.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod menu;
pub mod time;
pub mod ui;

pub use error::Error;
pub use menu::{EventKind, Menu, NodeId, ValueSource, ValueText};
