//! The "current week" label printed in every page header.
//!
//! Weeks run Sunday through Saturday. The label for a date is the Sunday on
//! or before it and the following Saturday, formatted `MM/DD ~ MM/DD`. The
//! date is passed in rather than read from the clock, so the binary decides
//! what "today" means.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// A Sunday-to-Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_sunday());
        let start = date - Days::new(offset);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    /// Header label, e.g. `03/09 ~ 03/15`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ~ {}",
            self.start.format("%m/%d"),
            self.end.format("%m/%d")
        )
    }
}
