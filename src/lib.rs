//! `swtimer` library: a cooperative software timer for embedded polling
//! loops. One-shot and repeating callbacks are scheduled in wall-clock
//! milliseconds and fired from a non-blocking `tick()` poll. No allocation,
//! no interrupts, no scheduler: all state lives in one `Timer` value owned
//! by the caller.
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]
#![deny(unused_must_use)]
//==================================================================================
/// Monotonic millisecond clock sources feeding the timer.
pub mod clock;
/// Millisecond period value and its days/hours/minutes/seconds builder.
pub mod period;
/// The timer itself: mode, period, deadline mark, optional callback.
pub mod timer;
//==================================================================================
pub use clock::Clock;
pub use period::{Period, PeriodBuilder};
pub use timer::{Callback, Mode, Timer};
