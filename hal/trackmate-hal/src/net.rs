//! Network link state
//!
//! Association and address acquisition are owned by the board's bring-up
//! code. The poll loop only asks whether the link is usable.

use core::fmt;

/// IPv4 address in network order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ipv4(pub [u8; 4]);

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

/// Network interface state
pub trait NetworkLink {
    /// Check if the link is up and has an address
    fn is_connected(&mut self) -> bool;

    /// The address assigned to this device, if any
    fn local_ip(&self) -> Option<Ipv4> {
        None
    }
}
