//! Button → menu action mapping.

use embedded_hal::delay::DelayNs;

use super::display::CharDisplay;
use super::ButtonEvent;
use crate::menu::Menu;
use crate::time::Clock;

/// Run the navigation action bound to `event`.
///
/// Returns `true` if the focus moved.
pub fn apply<D, T, const N: usize>(menu: &mut Menu<'_, D, T, N>, event: ButtonEvent) -> bool
where
    D: CharDisplay,
    T: DelayNs + Clock,
{
    match event {
        ButtonEvent::Up => menu.up(),
        ButtonEvent::Down => menu.down(),
        ButtonEvent::Select => menu.select(),
        ButtonEvent::Back => menu.back(),
    }
}
