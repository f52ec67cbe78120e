//! Events that trigger phase transitions

/// Events raised by the poll loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollEvent {
    /// The poll interval elapsed and the link is up
    IntervalElapsed,
    /// The fetch returned, with a response or a transport failure
    FetchCompleted,
    /// Outputs and display were updated for this tick
    Rendered,
}
