use super::Clock;

/// A clock backed by [`embassy_time::Instant`].
///
/// Truncates the 64-bit millisecond count to `u32`; the resulting wrap
/// every ~49.7 days is what the timer's elapsed arithmetic expects.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&mut self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
