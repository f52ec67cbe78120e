//! In-memory text surface
//!
//! `Screen` records text draws the way a frame-buffered OLED would hold
//! them: drawing goes to a pending frame, `flush` makes it the shown frame.
//! It is the host-side mirror of the panel and the display double in tests.

use heapless::{String, Vec};

use crate::backend::{DisplayBackend, DisplayError, TextSize};

/// Maximum text runs per frame
pub const MAX_RUNS: usize = 8;

/// Maximum bytes in one text run
pub const RUN_LEN: usize = 64;

/// Maximum bytes returned by [`Screen::line_at`]
pub const LINE_LEN: usize = 128;

const WIDTH: u16 = 128;
const HEIGHT: u16 = 64;

/// One `print` call: text drawn at a cursor position with a size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: u16,
    pub y: u16,
    pub size: TextSize,
    pub text: String<RUN_LEN>,
}

/// Frame-buffered text surface
#[derive(Debug, Clone)]
pub struct Screen {
    /// Frame being drawn
    pending: Vec<TextRun, MAX_RUNS>,
    /// Frame last flushed to the "panel"
    shown: Vec<TextRun, MAX_RUNS>,
    cursor: (u16, u16),
    size: TextSize,
    initialized: bool,
    flushes: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank, uninitialized screen
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            shown: Vec::new(),
            cursor: (0, 0),
            size: TextSize::Small,
            initialized: false,
            flushes: 0,
        }
    }

    /// Whether `init` has been called
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of completed flushes
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    /// Runs of the shown frame, in draw order
    pub fn runs(&self) -> &[TextRun] {
        &self.shown
    }

    /// Current cursor position
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Text drawn exactly at (`x`, `y`) in the shown frame
    pub fn text_at(&self, x: u16, y: u16) -> Option<&str> {
        self.shown
            .iter()
            .find(|run| run.x == x && run.y == y)
            .map(|run| run.text.as_str())
    }

    /// All text on row `y` of the shown frame, left to right
    pub fn line_at(&self, y: u16) -> String<LINE_LEN> {
        let mut row: Vec<&TextRun, MAX_RUNS> = self.shown.iter().filter(|r| r.y == y).collect();
        row.sort_unstable_by_key(|r| r.x);

        let mut line = String::new();
        for run in row {
            // Saturates rather than fails; this is a debug view
            for ch in run.text.chars() {
                if line.push(ch).is_err() {
                    return line;
                }
            }
        }
        line
    }

    /// Check whether any run of the shown frame contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.shown.iter().any(|run| run.text.contains(needle))
    }

    /// Check whether the shown frame is empty
    pub fn is_blank(&self) -> bool {
        self.shown.is_empty()
    }
}

impl DisplayBackend for Screen {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.pending.clear();
        self.shown.clear();
        self.cursor = (0, 0);
        self.size = TextSize::Small;
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.pending.clear();
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_text_size(&mut self, size: TextSize) -> Result<(), DisplayError> {
        self.size = size;
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        if text.is_empty() {
            return Ok(());
        }

        let mut run_text = String::new();
        run_text
            .push_str(text)
            .map_err(|_| DisplayError::BufferOverflow)?;

        let (x, y) = self.cursor;
        self.pending
            .push(TextRun {
                x,
                y,
                size: self.size,
                text: run_text,
            })
            .map_err(|_| DisplayError::BufferOverflow)?;

        let advance = (text.chars().count() as u16).saturating_mul(self.size.char_width());
        self.cursor = (x.saturating_add(advance), y);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.shown = self.pending.clone();
        self.flushes = self.flushes.wrapping_add(1);
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, run) in self.shown.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "({},{}) {}", run.x, run.y, run.text.as_str());
        }
        defmt::write!(f, "]");
    }
}
