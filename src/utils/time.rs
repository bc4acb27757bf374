use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A point in time the field model can be evaluated at.
///
/// Implemented for the chrono date types and for [`DecimalYear`], so callers can pass whichever
/// representation they already hold.
pub trait ModelTime {
    /// Fractional year, e.g. 2021.2356 for 2021-03-28 00:00
    fn decimal_year(&self) -> f64;
}

/// A time already expressed as a fractional year
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct DecimalYear(pub f64);

impl ModelTime for DecimalYear {
    fn decimal_year(&self) -> f64 {
        self.0
    }
}

impl ModelTime for NaiveDate {
    fn decimal_year(&self) -> f64 {
        self.year() as f64 + self.ordinal0() as f64 / days_in_year(self.year())
    }
}

impl ModelTime for NaiveDateTime {
    fn decimal_year(&self) -> f64 {
        let date = self.date();
        let seconds = self.time().num_seconds_from_midnight() as f64
            + self.time().nanosecond() as f64 * 1e-9;
        date.year() as f64
            + (date.ordinal0() as f64 + seconds / SECONDS_PER_DAY) / days_in_year(date.year())
    }
}

impl ModelTime for DateTime<Utc> {
    fn decimal_year(&self) -> f64 {
        self.naive_utc().decimal_year()
    }
}

/// Number of days in the calendar year, 365 or 366
pub fn days_in_year(year: i32) -> f64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn start_of_year_is_whole() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(date.decimal_year(), 2020.0);
        assert_eq!(date.and_hms_opt(0, 0, 0).unwrap().decimal_year(), 2020.0);
    }

    #[test]
    fn day_of_year_fraction() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 28).unwrap();
        assert!(is_close!(date.decimal_year(), 2021.0 + 86.0 / 365.0));

        // 2020 is a leap year, so midnight starting July 2nd (day 183 of 366) is the middle
        let july_2 = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
        let mid = july_2.and_hms_opt(0, 0, 0).unwrap();
        assert!(is_close!(mid.decimal_year(), 2020.5));
        assert!(is_close!(july_2.decimal_year(), 2020.5));

        let noon = july_2.and_hms_opt(12, 0, 0).unwrap();
        assert!(is_close!(noon.decimal_year(), 2020.5 + 0.5 / 366.0));
    }

    #[test]
    fn time_of_day_contributes() {
        let dt = NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!(is_close!(dt.decimal_year(), 2019.0 + 0.5 / 365.0));
        assert!(is_close!(dt.and_utc().decimal_year(), dt.decimal_year()));
    }

    #[test]
    fn leap_years() {
        assert_eq!(days_in_year(2000), 366.0);
        assert_eq!(days_in_year(1900), 365.0);
        assert_eq!(days_in_year(2024), 366.0);
        assert_eq!(days_in_year(2023), 365.0);
    }
}
