//! Display abstraction traits and shared components for Trackmate
//!
//! This crate provides:
//! - `DisplayBackend` trait for the small bitmap display on the device
//! - `DisplayExt` helpers for common drawing sequences
//! - `Screen`, an in-memory text surface implementing `DisplayBackend`
//!
//! # Architecture
//!
//! The status presenter draws through `DisplayBackend` without knowing which
//! controller sits behind it. The real OLED driver is provided by the board
//! support code; `Screen` mirrors what would be shown and is used for host
//! testing and debug dumps.
//!
//! Coordinates are in pixels with the origin at the top-left corner. Text
//! uses the classic 6x8 glyph cell, scaled by the current [`TextSize`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, DisplayExt, TextSize, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use screen::{Screen, TextRun, LINE_LEN, MAX_RUNS, RUN_LEN};
