//! # Quickstart Demo
//!
//! Minimal tour of swtimer on a host:
//! - Build a period from wall-clock components
//! - Arm a repeating timer
//! - Poll it from a non-blocking loop
//!
//! ```bash
//! cargo run --example quickstart --features std
//! ```

use swtimer::{clock::StdClock, Period, Timer};

fn main() {
    println!("=== swtimer Quickstart ===\n");

    // ======================================================================
    // 1. Build a period
    // ======================================================================
    println!("1. Building a period");

    let period = Period::builder().millis(200).build();
    println!("   Period: {} ms\n", period.as_millis());

    // ======================================================================
    // 2. Arm a repeating timer on the host clock
    // ======================================================================
    println!("2. Arming a repeating timer");

    let mut timer = Timer::new(StdClock::new());
    timer.set_interval(period);
    println!("   Running: {}\n", timer.is_running());

    // ======================================================================
    // 3. Poll from the main loop
    // ======================================================================
    println!("3. Polling until five firings");

    let mut fired = 0u32;
    while fired < 5 {
        if timer.tick() {
            fired += 1;
            println!("   fired #{fired}");
        }
        // A firmware loop would do other work here instead of sleeping.
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    timer.stop();
    println!("\n   Stopped. Running: {}", timer.is_running());
}
