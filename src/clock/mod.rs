//! Clock-source abstraction providing the single timing primitive the timer
//! needs: a monotonic millisecond reading supplied by the host environment.

#[cfg(feature = "embassy")]
mod embassy_clock;
#[cfg(feature = "std")]
mod std_clock;

#[cfg(feature = "embassy")]
pub use embassy_clock::EmbassyClock;
#[cfg(feature = "std")]
pub use std_clock::StdClock;

/// Monotonic millisecond clock source.
///
/// `now` reports milliseconds since boot inside a `u32`, wrapping every
/// 2^32 ms (about 49.7 days). The timer only ever subtracts two readings
/// with wrapping arithmetic, so the wrap is harmless as long as no single
/// period approaches the full range.
pub trait Clock {
    /// Current time in milliseconds. Must never move backwards except by
    /// wrapping past `u32::MAX`.
    fn now(&mut self) -> u32;
}
