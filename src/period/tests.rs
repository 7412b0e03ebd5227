//! Period builder arithmetic tests.
use super::*;

#[test]
/// Composite input: 500 ms + 1 s collapses to 1500 ms.
fn test_millis_plus_seconds() {
    let period = Period::builder().millis(500).seconds(1).build();
    assert_eq!(period.as_millis(), 1500);
}

#[test]
/// Every component contributes to the millisecond total.
fn test_full_composite() {
    let period = Period::builder()
        .millis(250)
        .seconds(5)
        .minutes(2)
        .hours(1)
        .days(1)
        .build();
    // ((1*86400 + 1*3600 + 2*60 + 5) * 1000) + 250
    assert_eq!(period.as_millis(), 90_125_250);
}

#[test]
/// Totals past u32::MAX milliseconds wrap instead of saturating.
fn test_overflow_wraps() {
    // 50 days = 4_320_000_000 ms, beyond the 32-bit range.
    let period = Period::builder().days(50).build();
    assert_eq!(period.as_millis(), 4_320_000_000u64 as u32);
}

#[test]
/// Raw millisecond construction and the zero sentinel.
fn test_raw_millis() {
    assert_eq!(Period::from(1000u32).as_millis(), 1000);
    assert_eq!(Period::from_millis(42).as_millis(), 42);
    assert!(Period::ZERO.is_zero());
    assert!(!Period::from_millis(1).is_zero());
}

#[test]
/// An empty builder yields the zero period.
fn test_empty_builder_is_zero() {
    assert!(Period::builder().build().is_zero());
}
