//! GPIO button input with async debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP     - previous entry
//!   - DOWN   - next entry
//!   - SELECT - open submenu / value view
//!   - BACK   - return to the enclosing menu
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends a `ButtonEvent` to the UI channel.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::ButtonEvent;
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

/// Depth of the button event channel.
pub const BUTTON_QUEUE_DEPTH: usize = 4;

pub type ButtonSender = Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>;

/// Run a single button polling loop.
///
/// `btn` must already be configured as an input with pull-up. Waits for
/// the pin to go low (pressed), debounces, sends the event, then waits for
/// release before repeating.
pub async fn button_task<P>(mut btn: P, event: ButtonEvent, tx: ButtonSender) -> !
where
    P: InputPin + Wait,
{
    loop {
        // Wait for falling edge (button press, active-low).
        if btn.wait_for_falling_edge().await.is_err() {
            warn!("Button: edge wait failed for {}", event);
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
            continue;
        }

        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low().unwrap_or(false) {
            info!("Button: {}", event);
            tx.send(event).await;

            // Wait for release to avoid repeat triggers.
            let _ = btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
