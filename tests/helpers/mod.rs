/// Test doubles simulating the host's millisecond counter during
/// integration tests.
use core::cell::Cell;
use swtimer::Clock;

#[allow(dead_code)]
/// Hand-advanced clock standing in for the hardware millisecond counter.
pub struct MockClock {
    now: Cell<u32>,
}

#[allow(dead_code)]
impl MockClock {
    /// Start the counter at an arbitrary reading.
    pub fn starting_at(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move time forward, wrapping past `u32::MAX` like the real counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for &MockClock {
    fn now(&mut self) -> u32 {
        self.now.get()
    }
}
