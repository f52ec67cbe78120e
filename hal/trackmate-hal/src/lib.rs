//! Trackmate Hardware Abstraction Layer
//!
//! This crate defines the capabilities the status monitor needs from the
//! board it runs on. Chip-specific code (or a host simulator) implements
//! them; the application logic in `trackmate-core` only sees the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (trackmate-core poll loop) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  trackmate-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   trackmate-  │       │  board Wi-Fi  │
//! │    drivers    │       │  + HTTP stack │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (LEDs, buzzer)
//! - [`http::HttpClient`] - Blocking HTTP GET
//! - [`net::NetworkLink`] - Link state of the network interface
//! - [`clock::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod http;
pub mod net;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::OutputPin;
pub use http::{HttpClient, HttpResponse, TransportError};
pub use net::{Ipv4, NetworkLink};
