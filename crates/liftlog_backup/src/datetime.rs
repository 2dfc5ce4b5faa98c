//! Date and time-of-day DAO construction.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::dao::{DateOnlyDao, TimeOnlyDao};

const SECS_PER_DAY: i64 = 86_400;

impl DateOnlyDao {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

impl TimeOnlyDao {
    /// Build a time-of-day from a base time plus an offset in seconds.
    ///
    /// The offset exists to spread synthesized per-set timestamps across a
    /// session; the sum wraps modulo 24 hours so it never names a second
    /// calendar day.
    pub fn from_time_offset(base: NaiveTime, offset_secs: i64) -> Self {
        let total = (i64::from(base.num_seconds_from_midnight()) + offset_secs)
            .rem_euclid(SECS_PER_DAY);
        Self {
            hour: (total / 3600) as i32,
            minute: (total % 3600 / 60) as i32,
            second: (total % 60) as i32,
            millisecond: 0,
            microsecond: 0,
        }
    }
}
