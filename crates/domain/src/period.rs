// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// Identifies one reporting month.
///
/// A period is a pure filter predicate over record dates. It is never
/// stored; every report query carries its own period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The calendar month (1-12).
    month: u8,
    /// The four-digit calendar year.
    year: u16,
}

impl ReportPeriod {
    /// Creates a new `ReportPeriod`.
    ///
    /// # Arguments
    ///
    /// * `month` - The calendar month (must be between 1 and 12 inclusive)
    /// * `year` - The four-digit calendar year
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the month is not in the range
    /// 1-12, or `DomainError::InvalidYear` if the year is not four digits.
    pub const fn new(month: u8, year: u16) -> Result<Self, DomainError> {
        if month < 1 || month > 12 {
            return Err(DomainError::InvalidMonth { month });
        }
        if year < 1000 || year > 9999 {
            return Err(DomainError::InvalidYear { year });
        }
        Ok(Self { month, year })
    }

    /// Returns the calendar month (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns whether a date falls inside this reporting month.
    ///
    /// This is the filter predicate used by both report builders: the
    /// calendar month and year extracted from the date must both match.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        u8::from(date.month()) == self.month && date.year() == i32::from(self.year)
    }

    /// Renders a display label for this period, e.g. `"May 2025"`.
    #[must_use]
    pub fn label(&self) -> String {
        time::Month::try_from(self.month).map_or_else(
            |_| self.year.to_string(),
            |month| format!("{month} {}", self.year),
        )
    }
}
