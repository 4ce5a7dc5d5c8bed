use chrono::{Duration, Local, Months, NaiveDate};

/// Raw-day approximation of five years.
pub const DEFAULT_WINDOW_DAYS: u32 = 1825;

/// The rolling lookback period beyond which releases are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyWindow {
    Days(u32),
    CalendarYears(u32),
}

impl Default for RecencyWindow {
    fn default() -> Self {
        RecencyWindow::Days(DEFAULT_WINDOW_DAYS)
    }
}

impl RecencyWindow {
    /// Oldest date still inside the window when the run happens on `today`.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            RecencyWindow::Days(days) => today
                .checked_sub_signed(Duration::days(i64::from(days)))
                .unwrap_or(NaiveDate::MIN),
            RecencyWindow::CalendarYears(years) => today
                .checked_sub_months(Months::new(years.saturating_mul(12)))
                .unwrap_or(NaiveDate::MIN),
        }
    }

    /// Inclusive: a date equal to the cutoff is in the window.
    pub fn contains_at(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.cutoff(today)
    }

    /// Same check against the local wall clock.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_at(date, today())
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let window = RecencyWindow::default();
        let today = fixed_today();
        assert!(window.contains_at(today - Duration::days(1825), today));
        assert!(!window.contains_at(today - Duration::days(1826), today));
        assert!(window.contains_at(today, today));
    }

    #[test]
    fn test_monotonic_for_fixed_today() {
        let window = RecencyWindow::default();
        let today = fixed_today();
        let mut passed = false;
        for offset in (0..2500).rev() {
            let date = today - Duration::days(offset);
            let inside = window.contains_at(date, today);
            assert!(!passed || inside, "window not monotonic at {date}");
            passed |= inside;
        }
        assert!(passed);
    }

    #[test]
    fn test_calendar_years() {
        let window = RecencyWindow::CalendarYears(5);
        let today = fixed_today();
        assert_eq!(window.cutoff(today), NaiveDate::from_ymd_opt(2020, 6, 15).unwrap());
        // 1825 raw days lands one day later because of 2024's leap day
        assert_eq!(
            RecencyWindow::default().cutoff(today),
            NaiveDate::from_ymd_opt(2020, 6, 16).unwrap()
        );
    }

    #[test]
    fn test_contains_uses_wall_clock() {
        let window = RecencyWindow::default();
        assert!(window.contains(today()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
    }
}
