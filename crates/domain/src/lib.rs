// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod error;
mod lenient;
mod payroll;
mod period;
mod report;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{compute_duration_hours, format_clock_time};
pub use error::DomainError;
pub use lenient::{hours_or_zero, rate_or_zero};
pub use payroll::{PayrollEntry, build_payroll_overview, overview_has_no_data};
pub use period::ReportPeriod;
pub use report::{EmployeeMonthlyReport, build_report};

// Re-export public types
pub use types::{AttendanceRecord, AttendanceStatus, Employee, EmployeeId};
