//! Character display abstraction and the SSD1306 OLED adapter.
//!
//! The menu only needs a character grid: clear it, move the cursor,
//! write text, and draw one of a few custom glyphs. HD44780-style LCD
//! drivers map onto [`CharDisplay`] one to one; the OLED adapter below
//! emulates the grid with a monospace font.

/// Character-cell display consumed by the menu renderer.
///
/// Geometry is fixed by the caller in `Menu::begin` and never changes.
pub trait CharDisplay {
    type Error;

    /// Blank the whole screen and home the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write text at the cursor, advancing it.
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Write a glyph previously stored with `register_glyph`, advancing the cursor.
    fn write_glyph(&mut self, index: u8) -> Result<(), Self::Error>;

    /// Store a 5×8 bitmap (one byte per pixel row) at `index`.
    fn register_glyph(&mut self, index: u8, bitmap: &[u8; 8]) -> Result<(), Self::Error>;

    /// Push buffered output to the panel. Unbuffered displays need not override.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(feature = "embedded")]
pub use oled::{init, Display, OledCharDisplay, OLED_COLS, OLED_ROWS};

#[cfg(feature = "embedded")]
mod oled {
    use super::CharDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::{Baseline, Text};
    use ssd1306::mode::BufferedGraphicsMode;
    use ssd1306::prelude::*;
    use ssd1306::I2CDisplayInterface;
    use ssd1306::Ssd1306;

    /// Type alias for the concrete display driver.
    ///
    /// Generic over the I²C implementation so callers pass in their HAL's
    /// I²C peripheral.
    pub type Display<I2C> =
        Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

    /// Character cell size of `FONT_6X10`.
    const CELL_W: i32 = 6;
    const CELL_H: i32 = 10;

    /// Number of custom glyph slots, as on HD44780 CGRAM.
    const GLYPH_SLOTS: usize = 8;

    /// Character grid of the 128×64 panel.
    pub const OLED_COLS: u8 = (128 / CELL_W) as u8;
    pub const OLED_ROWS: u8 = (64 / CELL_H) as u8;

    /// Initialise the SSD1306 display and clear the screen.
    pub fn init<I2C>(i2c: I2C) -> Display<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let _ = display.init();
        display.clear_buffer();
        let _ = display.flush();
        display
    }

    fn text_style() -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build()
    }

    /// 21×6 character grid on a 128×64 SSD1306.
    pub struct OledCharDisplay<I2C> {
        display: Display<I2C>,
        col: u8,
        row: u8,
        glyphs: [[u8; 8]; GLYPH_SLOTS],
    }

    impl<I2C> OledCharDisplay<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        pub fn new(display: Display<I2C>) -> Self {
            Self {
                display,
                col: 0,
                row: 0,
                glyphs: [[0; 8]; GLYPH_SLOTS],
            }
        }

        fn origin(&self) -> Point {
            Point::new(self.col as i32 * CELL_W, self.row as i32 * CELL_H)
        }
    }

    impl<I2C> CharDisplay for OledCharDisplay<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        type Error = <Display<I2C> as DrawTarget>::Error;

        fn clear(&mut self) -> Result<(), Self::Error> {
            self.display.clear_buffer();
            self.col = 0;
            self.row = 0;
            Ok(())
        }

        fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
            self.col = col;
            self.row = row;
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
            Text::with_baseline(text, self.origin(), text_style(), Baseline::Top)
                .draw(&mut self.display)?;
            self.col = self.col.saturating_add(text.chars().count() as u8);
            Ok(())
        }

        fn write_glyph(&mut self, index: u8) -> Result<(), Self::Error> {
            let Some(bitmap) = self.glyphs.get(index as usize) else {
                return Ok(());
            };
            let origin = self.origin();
            // 5×8 bitmap, bit 4 is the leftmost column.
            let pixels = bitmap.iter().enumerate().flat_map(|(y, bits)| {
                (0..5).map(move |x| {
                    let on = bits & (0b10000 >> x) != 0;
                    Pixel(
                        origin + Point::new(x, y as i32 + 1),
                        BinaryColor::from(on),
                    )
                })
            });
            self.display.draw_iter(pixels)?;
            self.col = self.col.saturating_add(1);
            Ok(())
        }

        fn register_glyph(&mut self, index: u8, bitmap: &[u8; 8]) -> Result<(), Self::Error> {
            if let Some(slot) = self.glyphs.get_mut(index as usize) {
                *slot = *bitmap;
            }
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.display.flush()
        }
    }
}
