//! Cooperative timer polled from a non-blocking main loop: holds a period,
//! a deadline mark, a mode and an optional callback; each `tick()` compares
//! the clock against the deadline and fires once the period has elapsed.
use crate::clock::Clock;
use crate::period::Period;

//==================================================================================Types

/// Zero-argument handler invoked when the timer fires.
///
/// A plain function pointer keeps the callback slot `Copy` and free of
/// allocation; state shared with the handler has to live outside the timer,
/// or be driven from the return value of [`Timer::tick`] instead.
pub type Callback = fn();

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Not armed; polling is a no-op.
    Stopped,
    /// Re-arms itself after each firing.
    Repeating,
    /// Stops itself after firing once.
    OneShot,
}

/// Cooperative software timer owning its clock source.
///
/// The owner polls [`tick`](Timer::tick) from one control-flow context at a
/// frequency high enough for the configured period; nothing here blocks,
/// sleeps, or registers with a scheduler.
///
/// # Example
///
/// ```
/// use swtimer::{Clock, Period, Timer};
///
/// // A clock advancing 100 ms per reading.
/// struct TestClock(u32);
/// impl Clock for TestClock {
///     fn now(&mut self) -> u32 {
///         self.0 += 100;
///         self.0
///     }
/// }
///
/// // Arming reads the clock once (100), so the 300 ms period elapses
/// // on the third poll (reading 400).
/// let mut timer = Timer::new(TestClock(0));
/// timer.set_interval(Period::from_millis(300));
/// assert!(!timer.tick());
/// assert!(!timer.tick());
/// assert!(timer.tick());
/// ```
pub struct Timer<C: Clock> {
    clock: C,
    mode: Mode,
    period: Period,
    deadline_mark: u32,
    callback: Option<Callback>,
}

impl<C: Clock> Timer<C> {
    /// Create a stopped timer with a zero period and no callback.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            mode: Mode::Stopped,
            period: Period::ZERO,
            deadline_mark: 0,
            callback: None,
        }
    }

    /// Create a timer with the given period and start it in repeating mode
    /// right away.
    pub fn with_period(clock: C, period: impl Into<Period>) -> Self {
        let mut timer = Self::new(clock);
        timer.period = period.into();
        timer.start();
        timer
    }

    //==================================================================================Configuration

    /// Set the period without arming the timer.
    pub fn set_period(&mut self, period: impl Into<Period>) {
        self.period = period.into();
    }

    /// Set the period and start in repeating mode.
    pub fn set_interval(&mut self, period: impl Into<Period>) {
        self.period = period.into();
        self.start();
    }

    /// Install `callback`, set the period and start in repeating mode.
    pub fn set_interval_with(&mut self, callback: Callback, period: impl Into<Period>) {
        self.callback = Some(callback);
        self.set_interval(period);
    }

    /// Set the period and start in one-shot mode.
    pub fn set_timeout(&mut self, period: impl Into<Period>) {
        self.period = period.into();
        self.start_once();
    }

    /// Install `callback`, set the period and start in one-shot mode.
    pub fn set_timeout_with(&mut self, callback: Callback, period: impl Into<Period>) {
        self.callback = Some(callback);
        self.set_timeout(period);
    }

    /// Install a handler to run on each firing. Does not touch the mode.
    pub fn attach(&mut self, callback: Callback) {
        self.callback = Some(callback);
    }

    /// Remove the handler. Does not touch the mode.
    pub fn detach(&mut self) {
        self.callback = None;
    }

    //==================================================================================Control

    /// Arm in repeating mode, measuring the period from the current clock
    /// reading. Silent no-op while the period is zero.
    pub fn start(&mut self) {
        self.arm(Mode::Repeating);
    }

    /// Arm in one-shot mode. Silent no-op while the period is zero.
    pub fn start_once(&mut self) {
        self.arm(Mode::OneShot);
    }

    fn arm(&mut self, mode: Mode) {
        if self.period.is_zero() {
            return;
        }
        self.deadline_mark = self.clock.now();
        self.mode = mode;
        #[cfg(feature = "defmt")]
        defmt::trace!("armed {}: {} ms", self.mode, self.period.as_millis());
    }

    /// Disarm the timer. Idempotent; takes effect at the next poll.
    pub fn stop(&mut self) {
        self.mode = Mode::Stopped;
    }

    /// True while the timer is armed (repeating or one-shot).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.mode != Mode::Stopped
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Configured period.
    #[inline]
    pub fn period(&self) -> Period {
        self.period
    }

    //==================================================================================Poll

    /// Poll the timer; call this from the main loop.
    ///
    /// Returns true exactly when the period elapsed on this poll: the
    /// callback (if any) runs first, then a repeating timer re-arms from a
    /// fresh clock reading and a one-shot timer stops. The elapsed check is
    /// a wrapping subtraction, so it stays correct when the millisecond
    /// counter wraps past `u32::MAX`. Never blocks, never sleeps.
    pub fn tick(&mut self) -> bool {
        if self.mode == Mode::Stopped {
            return false;
        }
        let now = self.clock.now();
        if now.wrapping_sub(self.deadline_mark) < self.period.as_millis() {
            return false;
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("fired after {} ms", self.period.as_millis());
        if let Some(callback) = self.callback {
            callback();
        }
        match self.mode {
            // Re-arm from a fresh reading; a slow callback delays the next
            // deadline rather than shortening it.
            Mode::Repeating => self.start(),
            _ => self.stop(),
        }
        true
    }
}
