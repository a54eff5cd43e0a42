//! Clock helpers for epoch-millisecond timestamps.

use chrono::{DateTime, Utc};

/// Current time in milliseconds since the Unix epoch.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Converts an epoch-millisecond value back to a UTC timestamp.
///
/// Values outside chrono's representable range fall back to the epoch.
pub fn from_epoch_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_millis_is_recent() {
        // 2024-01-01T00:00:00Z in millis
        let jan_2024 = 1_704_067_200_000;
        assert!(epoch_millis() > jan_2024);
    }

    #[test]
    fn test_epoch_millis_round_trip() {
        let now = epoch_millis();
        let ts = from_epoch_millis(now);
        assert_eq!(ts.timestamp_millis(), now);
    }

    #[test]
    fn test_from_epoch_millis_out_of_range() {
        let ts = from_epoch_millis(i64::MAX);
        assert_eq!(ts.timestamp_millis(), 0);
    }
}
