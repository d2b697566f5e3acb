//! Demo firmware: a small live-data menu on an SSD1306 OLED.

#![no_std]
#![no_main]

use core::cell::RefCell;
use core::fmt::Write;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Timer};
use lcdmenu::menu::{EventKind, Menu, NodeId, ValueSource, ValueText};
use lcdmenu::time::EmbassyTimebase;
use lcdmenu::ui::buttons::{self, BUTTON_QUEUE_DEPTH};
use lcdmenu::ui::display::{self, OledCharDisplay, OLED_COLS, OLED_ROWS};
use lcdmenu::ui::{input, ButtonEvent};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Debounced button presses, produced by the button tasks.
static BUTTONS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();

/// Control loop period while no button is pressed (ms).
const LOOP_TICK_MS: u64 = 50;

#[embassy_executor::task(pool_size = 4)]
async fn button(pin: Input<'static>, event: ButtonEvent) -> ! {
    buttons::button_task(pin, event, BUTTONS.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("lcdmenu {} starting", env!("CARGO_PKG_VERSION"));

    unwrap!(spawner.spawn(button(Input::new(p.P0_11, Pull::Up), ButtonEvent::Up)));
    unwrap!(spawner.spawn(button(Input::new(p.P0_12, Pull::Up), ButtonEvent::Down)));
    unwrap!(spawner.spawn(button(Input::new(p.P0_24, Pull::Up), ButtonEvent::Select)));
    unwrap!(spawner.spawn(button(Input::new(p.P0_25, Pull::Up), ButtonEvent::Back)));

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = OledCharDisplay::new(display::init(i2c));

    // Value sources must outlive the menu.
    let speed = RefCell::new(ValueText::new());
    let uptime = |out: &mut dyn Write| write!(out, "{}s", Instant::now().as_secs());
    let version = |out: &mut dyn Write| out.write_str(env!("CARGO_PKG_VERSION"));
    let on_open = |id: NodeId| info!("Menu: opened {}", id);

    let mut menu: Menu<'_, _, _> = Menu::new(oled, EmbassyTimebase);
    if menu.begin(OLED_COLS, OLED_ROWS).is_err() {
        defmt::error!("Display init failed");
    }

    let speed_entry = unwrap!(menu.add_value(None, "Speed", ValueSource::external(&speed)));
    let settings = unwrap!(menu.add_menu(None, "Settings"));
    unwrap!(menu.add_value(settings, "Uptime", ValueSource::poll(&uptime)));
    let about = unwrap!(menu.add_menu(settings, "About"));
    unwrap!(menu.add_value(about, "Version", ValueSource::poll(&version)));
    unwrap!(menu.listen(EventKind::Select, speed_entry, &on_open));
    unwrap!(menu.listen(EventKind::Select, settings, &on_open));

    let _ = menu.splash(&["lcdmenu", "UP DOWN SEL BACK"]);

    let mut ticks: u32 = 0;
    loop {
        let tick = Timer::after(Duration::from_millis(LOOP_TICK_MS));
        if let Either::First(event) = select(BUTTONS.receive(), tick).await {
            input::apply(&mut menu, event);
        }

        // Simulated sensor reading.
        ticks = ticks.wrapping_add(1);
        if let Ok(mut text) = speed.try_borrow_mut() {
            text.clear();
            let _ = write!(text, "{} km/h", (ticks / 4) % 120);
        }

        menu.refresh_values();
    }
}
