//! Display backend trait
//!
//! Defines the interface the presenter draws through.

use core::fmt::Write;

use heapless::String;

/// Width of one glyph cell at text size 1, in pixels
pub const GLYPH_WIDTH: u16 = 6;

/// Height of one glyph cell at text size 1, in pixels
pub const GLYPH_HEIGHT: u16 = 8;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display (I2C NAK, bus fault)
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Text scale factor
///
/// The device only uses the two smallest scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 6x8 pixel glyphs
    #[default]
    Small,
    /// 12x16 pixel glyphs
    Large,
}

impl TextSize {
    /// Scale factor applied to the base glyph cell
    pub const fn scale(self) -> u16 {
        match self {
            TextSize::Small => 1,
            TextSize::Large => 2,
        }
    }

    /// Horizontal advance per character, in pixels
    pub const fn char_width(self) -> u16 {
        GLYPH_WIDTH * self.scale()
    }

    /// Line height, in pixels
    pub const fn line_height(self) -> u16 {
        GLYPH_HEIGHT * self.scale()
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering text to the
/// device's bitmap display. Drawing calls only touch the frame buffer;
/// nothing is visible until [`DisplayBackend::flush`].
pub trait DisplayBackend {
    /// Bring the display controller up
    ///
    /// Called once at startup. A failure here is fatal for the device.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the frame buffer and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Select the scale for subsequent text
    fn set_text_size(&mut self, size: TextSize) -> Result<(), DisplayError>;

    /// Move the text cursor to pixel position (`x`, `y`)
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError>;

    /// Draw text at the cursor and advance it
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Send the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);
}

/// Helper trait for drawing common sequences
pub trait DisplayExt: DisplayBackend {
    /// Draw `text` at (`x`, `y`) with the given size
    fn print_at(
        &mut self,
        x: u16,
        y: u16,
        size: TextSize,
        text: &str,
    ) -> Result<(), DisplayError> {
        self.set_text_size(size)?;
        self.set_cursor(x, y)?;
        self.print(text)
    }

    /// Draw a signed integer at the cursor
    fn print_int(&mut self, value: i32) -> Result<(), DisplayError> {
        // "-2147483648" is the longest rendering
        let mut buf: String<11> = String::new();
        write!(buf, "{}", value).map_err(|_| DisplayError::BufferOverflow)?;
        self.print(&buf)
    }
}

// Blanket implementation for all DisplayBackend types
impl<T: DisplayBackend> DisplayExt for T {}
