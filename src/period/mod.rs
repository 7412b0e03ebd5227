//! Millisecond period value used to configure the timer. The builder
//! composes days/hours/minutes/seconds/milliseconds the way the wall-clock
//! inputs are given; the arithmetic wraps on `u32` overflow.

/// Configured duration between firings, in milliseconds.
///
/// # Example
///
/// ```
/// use swtimer::Period;
///
/// let period = Period::builder().millis(500).seconds(1).build();
/// assert_eq!(period.as_millis(), 1500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Period(u32);

impl Period {
    /// The zero-length period. A timer configured with it never arms.
    pub const ZERO: Self = Self(0);

    /// Build a period from a raw millisecond count.
    #[inline]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Return the period in milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// True when the period is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Create a builder composing the period from wall-clock components.
    #[inline]
    pub const fn builder() -> PeriodBuilder {
        PeriodBuilder::new()
    }
}

impl From<u32> for Period {
    #[inline]
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}

/// Builder composing a [`Period`] from days, hours, minutes, seconds and
/// milliseconds.
///
/// The components collapse as
/// `((days * 86400 + hours * 3600 + minutes * 60 + seconds) * 1000) + millis`
/// in wrapping `u32` arithmetic: a total past `u32::MAX` milliseconds wraps,
/// it is not rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodBuilder {
    millis: u32,
    seconds: u32,
    minutes: u32,
    hours: u32,
    days: u32,
}

impl PeriodBuilder {
    const fn new() -> Self {
        Self {
            millis: 0,
            seconds: 0,
            minutes: 0,
            hours: 0,
            days: 0,
        }
    }

    /// Millisecond component.
    #[inline]
    pub const fn millis(mut self, millis: u32) -> Self {
        self.millis = millis;
        self
    }

    /// Second component.
    #[inline]
    pub const fn seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self
    }

    /// Minute component.
    #[inline]
    pub const fn minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    /// Hour component.
    #[inline]
    pub const fn hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Day component.
    #[inline]
    pub const fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Collapse the components into a [`Period`].
    pub const fn build(self) -> Period {
        let mut seconds = self.seconds;
        seconds = seconds.wrapping_add(self.minutes.wrapping_mul(60));
        seconds = seconds.wrapping_add(self.hours.wrapping_mul(3600));
        seconds = seconds.wrapping_add(self.days.wrapping_mul(86_400));
        Period(seconds.wrapping_mul(1000).wrapping_add(self.millis))
    }
}

#[cfg(test)]
mod tests;
