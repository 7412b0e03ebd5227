//! # One-shot and Interval Demo
//!
//! The callback-driven surface: `set_interval_with` re-arms after every
//! firing, `set_timeout_with` fires once and stops itself.
//!
//! ```bash
//! cargo run --example one_shot_and_interval --features std
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use swtimer::{clock::StdClock, Period, Timer};

static HEARTBEATS: AtomicU32 = AtomicU32::new(0);

fn heartbeat() {
    let n = HEARTBEATS.fetch_add(1, Ordering::SeqCst) + 1;
    println!("   heartbeat #{n}");
}

fn deadline_reached() {
    println!("   one-shot deadline reached");
}

fn main() {
    println!("=== swtimer One-shot and Interval ===\n");

    let mut heart = Timer::new(StdClock::new());
    heart.set_interval_with(heartbeat, Period::from_millis(100));

    let mut deadline = Timer::new(StdClock::new());
    deadline.set_timeout_with(deadline_reached, Period::from_millis(450));

    println!("Polling both timers from one loop:");
    while deadline.is_running() || HEARTBEATS.load(Ordering::SeqCst) < 8 {
        heart.tick();
        deadline.tick();
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    heart.detach();
    heart.stop();
    println!("\nDone: {} heartbeats around one deadline.", HEARTBEATS.load(Ordering::SeqCst));
}
