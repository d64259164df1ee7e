//! Time source abstraction

/// Monotonic time source with microsecond resolution
///
/// Readings must never go backwards. A 64-bit counter does not wrap in
/// any realistic uptime, so callers compare readings directly.
pub trait Clock {
    /// Microseconds since an arbitrary fixed epoch (usually boot)
    fn now_us(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
