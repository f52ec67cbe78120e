//! Status presenter
//!
//! Builds the screens shown on the 128x64 OLED. Every view clears the
//! frame, draws, and flushes; there is no partial redraw.
//!
//! Status view layout:
//!
//! ```text
//! y=0   Bus Status:          (small)
//! y=20  MOVING | STOPPED     (large)
//! y=45  Next: <label>        (small, label capped at 14 chars)
//! ```

use core::fmt::Write;

use heapless::String;
use trackmate_display::{DisplayBackend, DisplayError, DisplayExt, TextSize};
use trackmate_hal::Ipv4;

use crate::status::BusStatus;

/// Row of the "Bus Status:" heading
pub const HEADING_Y: u16 = 0;

/// Row of the large MOVING/STOPPED text
pub const STATUS_Y: u16 = 20;

/// Row of the next-stop line
pub const NEXT_STOP_Y: u16 = 45;

/// Row of the failure code on the error view
pub const ERROR_CODE_Y: u16 = 10;

/// Row of the message on the boot screens
pub const BOOT_MESSAGE_Y: u16 = 10;

/// Longest stop label shown, in characters
pub const MAX_LABEL_CHARS: usize = 14;

/// Cut `text` to at most `max` characters (no ellipsis)
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Renders bus state and connection errors to the display
pub struct StatusPresenter<D> {
    display: D,
}

impl<D: DisplayBackend> StatusPresenter<D> {
    /// Create a presenter drawing to `display`
    pub fn new(display: D) -> Self {
        Self { display }
    }

    /// Initialize the display controller
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display.init()
    }

    /// Show the bus status view
    ///
    /// Anything other than MOVING is drawn as STOPPED.
    pub fn render(&mut self, status: BusStatus, next_stop: &str) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display
            .print_at(0, HEADING_Y, TextSize::Small, "Bus Status:")?;

        let headline = if status.is_moving() { "MOVING" } else { "STOPPED" };
        self.display
            .print_at(0, STATUS_Y, TextSize::Large, headline)?;

        self.display
            .print_at(0, NEXT_STOP_Y, TextSize::Small, "Next: ")?;
        self.display
            .print(truncate_chars(next_stop, MAX_LABEL_CHARS))?;

        self.display.flush()
    }

    /// Show the connection error view with the transport failure code
    pub fn render_error(&mut self, code: i16) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display.print_at(0, 0, TextSize::Small, "Conn Error")?;
        self.display.set_cursor(0, ERROR_CODE_Y)?;
        self.display.print("HTTP:")?;
        self.display.print_int(i32::from(code))?;
        self.display.flush()
    }

    /// Show the boot screen while the network comes up
    pub fn render_connecting(&mut self) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display
            .print_at(0, BOOT_MESSAGE_Y, TextSize::Small, "Connecting to WiFi...")?;
        self.display.flush()
    }

    /// Show the link-up screen with the assigned address
    pub fn render_connected(&mut self, ip: Option<Ipv4>) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display
            .print_at(0, BOOT_MESSAGE_Y, TextSize::Small, "WiFi Connected!")?;

        if let Some(ip) = ip {
            let mut text: String<15> = String::new();
            write!(text, "{}", ip).map_err(|_| DisplayError::BufferOverflow)?;
            self.display
                .set_cursor(0, BOOT_MESSAGE_Y + TextSize::Small.line_height())?;
            self.display.print(&text)?;
        }

        self.display.flush()
    }

    /// Get the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
