use crate::constants::DURATION_DECIMALS;
use std::time::Instant;

/// A single completed start/stop timing record.
///
/// Created when a lap is stopped and immutable afterwards. The duration is
/// computed once from the monotonic timestamp pair and stored, never
/// recomputed.
#[derive(Debug, Clone)]
pub struct Lap {
    label: String,
    started_at: Instant,
    ended_at: Instant,
    duration_ms: f64,
}

impl Lap {
    pub(crate) fn new(label: String, started_at: Instant, ended_at: Instant) -> Self {
        let duration_ms = ended_at.duration_since(started_at).as_secs_f64() * 1000.0;
        Self {
            label,
            started_at,
            ended_at,
            duration_ms,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn ended_at(&self) -> Instant {
        self.ended_at
    }

    /// Elapsed milliseconds at the clock's full sub-millisecond resolution.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// The duration as display text, always with [`DURATION_DECIMALS`]
    /// digits after the decimal point - e.g. `"12.34568"`.
    pub fn formatted_duration(&self) -> String {
        format!("{:.precision$}", self.duration_ms, precision = DURATION_DECIMALS)
    }
}

/// Returns the count of characters before the decimal separator, or the full
/// length when there is none.
///
/// Example: "123.45600" -> 3
pub(crate) fn digits_before_decimal(text: &str) -> usize {
    text.find('.').unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn lap_with_duration(label: &str, duration: Duration) -> Lap {
        let started_at = Instant::now();
        Lap::new(label.to_string(), started_at, started_at + duration)
    }

    #[test]
    fn duration_matches_the_timestamp_pair() {
        let lap = lap_with_duration("solve", Duration::from_nanos(1_234_567));

        let expected = lap
            .ended_at()
            .duration_since(lap.started_at())
            .as_secs_f64()
            * 1000.0;
        assert_eq!(lap.duration_ms(), expected);
        assert!(lap.duration_ms() >= 0.0);
        assert!(lap.ended_at() >= lap.started_at());
    }

    #[test]
    fn formatted_duration_is_fixed_precision() {
        let test_cases = [
            (0u64, "0.00000"),
            (1_234_000, "1.23400"),
            (12_345_678, "12.34568"),
            (123_456_000, "123.45600"),
        ];

        for (nanos, expected) in test_cases {
            let lap = lap_with_duration("case", Duration::from_nanos(nanos));
            assert_eq!(
                lap.formatted_duration(),
                expected,
                "failed for {} nanos",
                nanos
            );
        }
    }

    #[test]
    fn formatting_is_deterministic() {
        let lap = lap_with_duration("repeat", Duration::from_nanos(98_765_432));

        let first = lap.formatted_duration();
        let second = lap.formatted_duration();
        assert_eq!(first, second);
        assert_eq!(
            digits_before_decimal(&first),
            digits_before_decimal(&second)
        );
    }

    #[test]
    fn digits_before_decimal_counts_integer_characters() {
        let test_cases = [
            ("123.45600", 3),
            ("0.00000", 1),
            ("7", 1),
            ("1024", 4),
            ("", 0),
        ];

        for (text, expected) in test_cases {
            assert_eq!(
                digits_before_decimal(text),
                expected,
                "failed for {:?}",
                text
            );
        }
    }
}
