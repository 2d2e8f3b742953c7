//! Calendar month windows - the time scope of all budget aggregation.
//!
//! A window spans `[first day 00:00:00, last day 23:59:59]` inclusive and is
//! derived from the server-local clock. No timezone parameter is exposed;
//! transaction timestamps are stored naive, so month-boundary behavior for
//! remote users follows the server's clock.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// One calendar month and its inclusive datetime bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    /// Calendar year of the window
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// First day of the month at 00:00:00
    pub start: NaiveDateTime,
    /// Last day of the month at 23:59:59
    pub end: NaiveDateTime,
}

impl MonthWindow {
    /// The month window containing the current server-local date.
    #[must_use]
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The month window containing the given date.
    #[must_use]
    // Unwrap safety: day 1, the following month's day 1, and the fixed times
    // always exist for a date chrono already accepted.
    #[allow(clippy::unwrap_used)]
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();

        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let last = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .unwrap()
        .pred_opt()
        .unwrap();

        Self {
            year,
            month,
            start: first.and_hms_opt(0, 0, 0).unwrap(),
            end: last.and_hms_opt(23, 59, 59).unwrap(),
        }
    }

    /// The month bucket key in "YYYY-MM" form, used as the alert dedup month.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
