//! User interface subsystem - character display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: any [`display::CharDisplay`]; the firmware uses an SSD1306
//!   128×64 OLED via I²C emulating a 21×6 character grid
//! - **Buttons**: 4 tactile switches with debouncing (UP, DOWN, SELECT, BACK)

#[cfg(feature = "embedded")]
pub mod buttons;
pub mod display;
pub mod input;

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
    Back,
}
