//! Monotonic time source

/// Monotonic millisecond clock
///
/// The value must never go backwards. Its origin is arbitrary (usually
/// boot), only differences between readings are meaningful.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since an earlier reading
    ///
    /// Saturates to zero if `since` lies in the future.
    fn elapsed_since(&self, since: u64) -> u64 {
        self.now_ms().saturating_sub(since)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }
}
