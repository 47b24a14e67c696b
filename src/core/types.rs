/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (positive, unique within a run)
pub type Pid = u32;

/// Priority level (lower value runs first)
pub type Priority = i32;

/// Simulated time in abstract units (reported as milliseconds)
pub type Time = f64;

/// Whether a time value is usable as a burst or arrival time
#[inline]
pub fn is_valid_time(value: Time) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_validation() {
        assert!(is_valid_time(0.0));
        assert!(is_valid_time(24.5));
        assert!(!is_valid_time(-1.0));
        assert!(!is_valid_time(Time::NAN));
        assert!(!is_valid_time(Time::INFINITY));
    }
}
