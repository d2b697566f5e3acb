//! Application-wide constants and menu configuration.
//!
//! Timing parameters, capacities and the focus glyph live here so they
//! can be tuned in one place.

// Timing

/// Settle delay after every navigation action (ms).
///
/// Absorbs contact bounce from the physical buttons; applied even when
/// the action turned out to be a no-op.
pub const DEBOUNCE_MS: u32 = 350;

/// Minimum time between two value refresh redraws (ms).
pub const REFRESH_INTERVAL_MS: u64 = 750;

/// Default duration of the splash screen (ms).
pub const SPLASH_DURATION_MS: u32 = 4000;

/// Button edge debounce time used by the GPIO tasks (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// Capacities

/// Default number of arena slots, including the root sentinel.
pub const MAX_NODES: usize = 32;

/// Maximum stored title length (bytes). Longer titles are truncated.
pub const TITLE_CAPACITY: usize = 20;

/// Maximum length of a resolved value string (bytes).
pub const VALUE_CAPACITY: usize = 20;

/// Largest row count a display may report in `begin`.
pub const MAX_ROWS: u8 = 8;

// Rendering

/// Custom character slot holding the focus arrow.
pub const FOCUS_GLYPH_INDEX: u8 = 0;

/// 5×8 right-pointing arrow, one byte per pixel row (low 5 bits used).
pub const FOCUS_GLYPH: [u8; 8] = [
    0b00000, 0b01000, 0b01100, 0b01110, 0b01100, 0b01000, 0b00000, 0b00000,
];

/// Appended to the title on the first row of a value view.
pub const TITLE_DELIMITER: char = ':';

// GPIO pin assignments (nRF52840-DK defaults)
//
// Actual `embassy_nrf::peripherals::*` types are selected in `main.rs`.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   Button BACK    → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Runtime menu configuration, established once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuConfig {
    /// Settle delay after navigation (ms).
    pub debounce_ms: u32,
    /// Minimum interval between refresh redraws (ms).
    pub refresh_interval_ms: u64,
    /// Delimiter written after the title of a value view, if any.
    pub title_delimiter: Option<char>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            refresh_interval_ms: REFRESH_INTERVAL_MS,
            title_delimiter: Some(TITLE_DELIMITER),
        }
    }
}

impl MenuConfig {
    pub const fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub const fn with_refresh_interval_ms(mut self, ms: u64) -> Self {
        self.refresh_interval_ms = ms;
        self
    }

    pub const fn with_title_delimiter(mut self, delimiter: Option<char>) -> Self {
        self.title_delimiter = delimiter;
        self
    }
}
