//! Monotonic time source for rate-limited refreshes.

#[cfg(feature = "embedded")]
use embedded_hal::delay::DelayNs;

/// Millisecond clock that never goes backwards.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Embassy-backed timebase: `Instant` for the clock, blocking `Delay`
/// for the settle and splash delays.
#[cfg(feature = "embedded")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyTimebase;

#[cfg(feature = "embedded")]
impl Clock for EmbassyTimebase {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

#[cfg(feature = "embedded")]
impl DelayNs for EmbassyTimebase {
    fn delay_ns(&mut self, ns: u32) {
        embassy_time::Delay.delay_ns(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        embassy_time::Delay.delay_ms(ms);
    }
}
