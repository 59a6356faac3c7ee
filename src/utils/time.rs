//! Duration helpers

use std::time::Duration;

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`
pub fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_micros() {
        assert_eq!(saturating_micros(Duration::from_millis(3)), 3_000);
        assert_eq!(saturating_micros(Duration::ZERO), 0);
    }

    #[test]
    fn test_saturating_micros_does_not_wrap() {
        assert_eq!(saturating_micros(Duration::MAX), u64::MAX);
    }
}
