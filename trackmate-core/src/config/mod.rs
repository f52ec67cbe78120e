//! Configuration types
//!
//! Board-agnostic configuration structures, stored as postcard binary data
//! when the `serde` feature is enabled. Timing constants are not part of
//! the configuration and live next to the code that uses them.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
