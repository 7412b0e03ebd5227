//! Elapsed-time arithmetic across the ~49.7-day wrap of the millisecond
//! counter: timers armed shortly before the wrap must still fire at the
//! correct offset.
mod helpers;

use helpers::MockClock;
use swtimer::{Period, Timer};

#[test]
fn one_shot_armed_before_wrap_fires_after_it() {
    // 3 s worth of counter left before u32::MAX.
    let clock = MockClock::starting_at(u32::MAX - 3_000);
    let mut timer = Timer::new(&clock);
    timer.set_timeout(Period::builder().seconds(10).build());

    // Cross the wrap with 7 s still to go.
    clock.advance(3_001);
    assert!(!timer.tick());

    clock.advance(6_998);
    assert!(!timer.tick());
    clock.advance(1);
    assert!(timer.tick());
    assert!(!timer.is_running());
}

#[test]
fn repeating_timer_keeps_cadence_through_the_wrap() {
    let clock = MockClock::starting_at(u32::MAX - 250);
    let mut timer = Timer::new(&clock);
    timer.set_interval(Period::from_millis(100));

    // Ten full periods straddling the wrap, one firing each.
    for _ in 0..10 {
        clock.advance(99);
        assert!(!timer.tick());
        clock.advance(1);
        assert!(timer.tick());
    }
}

#[test]
fn deadline_mark_right_at_the_maximum_reading() {
    let clock = MockClock::starting_at(u32::MAX);
    let mut timer = Timer::new(&clock);
    timer.set_interval(Period::from_millis(1));

    assert!(!timer.tick());
    clock.advance(1);
    assert!(timer.tick());
}
