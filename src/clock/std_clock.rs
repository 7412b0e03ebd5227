use super::Clock;

/// A clock backed by [`std::time::Instant`], for host-side use.
///
/// Reports milliseconds elapsed since construction, truncated to `u32` so
/// the counter wraps after ~49.7 days like a hardware millisecond counter
/// would.
pub struct StdClock {
    epoch: std::time::Instant,
}

impl StdClock {
    /// Start counting from the moment of construction.
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now(&mut self) -> u32 {
        self.epoch.elapsed().as_millis() as u32
    }
}
