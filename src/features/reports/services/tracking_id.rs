use rand::distributions::{Alphanumeric, DistString};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of the random segment
const RANDOM_SEGMENT_LEN: usize = 6;

/// Number of trailing base-36 digits kept from the clock reading
const TIME_SEGMENT_LEN: usize = 4;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates public tracking ids in the form `PREFIX-RANDOM-TIME`, e.g. `CATEM-AB12CD-X7Z9`.
///
/// The time segment comes from a millisecond clock that never repeats a reading
/// (`max(now, last + 1)`), so within one process the last four base-36 digits are
/// distinct for 36^4 consecutive ids even before the random segment is considered.
#[derive(Debug)]
pub struct TrackingIdGenerator {
    prefix: String,
    last_tick: AtomicU64,
}

impl TrackingIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last_tick: AtomicU64::new(0),
        }
    }

    pub fn generate(&self) -> String {
        let random = Alphanumeric
            .sample_string(&mut rand::thread_rng(), RANDOM_SEGMENT_LEN)
            .to_ascii_uppercase();
        let time = to_base36(self.next_tick());
        let time_segment = &time[time.len().saturating_sub(TIME_SEGMENT_LEN)..];

        format!("{}-{}-{:0>4}", self.prefix, random, time_segment)
    }

    fn next_tick(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let mut last = self.last_tick.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last_tick.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::TRACKING_ID_REGEX;
    use std::collections::HashSet;

    #[test]
    fn test_format() {
        let generator = TrackingIdGenerator::new("CATEM");
        let id = generator.generate();

        assert!(TRACKING_ID_REGEX.is_match(&id), "unexpected id {}", id);
        assert!(id.starts_with("CATEM-"));
        assert_eq!(id.len(), "CATEM-AB12CD-X7Z9".len());
    }

    #[test]
    fn test_ten_thousand_ids_are_distinct() {
        let generator = TrackingIdGenerator::new("CATEM");
        let ids: HashSet<String> = (0..10_000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_clock_is_strictly_increasing() {
        let generator = TrackingIdGenerator::new("CATEM");
        let first = generator.next_tick();
        let second = generator.next_tick();
        let third = generator.next_tick();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "ZZ");
    }
}
