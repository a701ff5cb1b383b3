//! Certificate aging computation and display helpers.
//!
//! Aging is the number of whole calendar days elapsed since a
//! certificate's receipt date. It is never persisted: every evaluation
//! recomputes it against the local wall-clock date.

use chrono::{Local, NaiveDate};

/// Whole calendar days between `fecha_recepcion` and `today`.
///
/// Negative when the receipt date lies in the future of `today`.
pub fn aging_days(fecha_recepcion: NaiveDate, today: NaiveDate) -> i64 {
    (today - fecha_recepcion).num_days()
}

/// [`aging_days`] against the local wall-clock date.
pub fn aging_days_now(fecha_recepcion: NaiveDate) -> i64 {
    aging_days(fecha_recepcion, Local::now().date_naive())
}

/// Spanish display string for an aging value.
pub fn format_aging(days: i64) -> String {
    match days {
        0 => "Hoy".to_string(),
        1 => "Hace 1 día".to_string(),
        n => format!("Hace {n} días"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(aging_days(date(2025, 3, 10), date(2025, 3, 10)), 0);
    }

    #[test]
    fn whole_days_elapsed() {
        assert_eq!(aging_days(date(2025, 3, 3), date(2025, 3, 10)), 7);
        assert_eq!(aging_days(date(2025, 2, 28), date(2025, 3, 1)), 1);
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        assert_eq!(aging_days(date(2024, 12, 30), date(2025, 1, 2)), 3);
    }

    #[test]
    fn future_receipt_is_negative() {
        assert_eq!(aging_days(date(2025, 3, 12), date(2025, 3, 10)), -2);
    }

    #[test]
    fn display_strings() {
        assert_eq!(format_aging(0), "Hoy");
        assert_eq!(format_aging(1), "Hace 1 día");
        assert_eq!(format_aging(14), "Hace 14 días");
    }
}
