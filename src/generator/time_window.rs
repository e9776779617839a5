use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime};
use rand::Rng;

/// Closed interval that generated timestamps are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// From midnight on the first of `reference`'s month up to `reference`.
    pub fn this_month(reference: NaiveDateTime) -> Self {
        let first = reference.date().with_day(1).unwrap_or(reference.date());
        Self {
            start: first.and_time(NaiveTime::default()),
            end: reference,
        }
    }

    pub fn this_month_now() -> Self {
        Self::this_month(Local::now().naive_local())
    }

    /// Uniform instant in the window, truncated to whole seconds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let span = (self.end - self.start).num_seconds().max(0);
        self.start + Duration::seconds(rng.gen_range(0..=span))
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        self.start <= *ts && *ts <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 18)
            .unwrap()
            .and_hms_opt(15, 30, 12)
            .unwrap()
    }

    #[test]
    fn test_window_starts_at_month_start() {
        let window = TimeWindow::this_month(reference());
        assert_eq!(
            window.start,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(window.end, reference());
    }

    #[test]
    fn test_samples_fall_inside_window() {
        let window = TimeWindow::this_month(reference());
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let ts = window.sample(&mut rng);
            assert!(window.contains(&ts));
            assert_eq!(ts.nanosecond(), 0);
        }
    }

    #[test]
    fn test_degenerate_window() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let window = TimeWindow::this_month(start);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(window.sample(&mut rng), start);
    }
}
