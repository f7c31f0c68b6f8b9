// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Responses are display-ready models: numbers already rounded, clock
//! times already formatted, period labels already rendered. The export
//! collaborator and the HTTP layer consume them as-is.

use serde::{Deserialize, Serialize};

/// Request for a single-employee monthly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReportRequest {
    /// The employee identifier, in any representation the collaborators
    /// use (normalized before lookup).
    pub employee_id: String,
    /// The calendar month (1-12).
    pub month: u8,
    /// The four-digit calendar year.
    pub year: u16,
}

/// Request for the monthly attendance sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendanceRequest {
    /// The calendar month (1-12).
    pub month: u8,
    /// The four-digit calendar year.
    pub year: u16,
}

/// Request for the payroll overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollOverviewRequest {
    /// The calendar month (1-12).
    pub month: u8,
    /// The four-digit calendar year.
    pub year: u16,
}

/// One day in a single-employee report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendanceRow {
    /// The calendar date, rendered as `YYYY-MM-DD`.
    pub date: String,
    /// Formatted check-in time, or `"N/A"`.
    pub check_in: String,
    /// Formatted check-out time, or `"N/A"`.
    pub check_out: String,
    /// The day's hours (ledger value, zero when absent).
    pub hours: f64,
    /// The day's status label, verbatim from the ledger.
    pub status: String,
}

/// Response for a single-employee monthly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReportResponse {
    /// The normalized employee identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub display_name: String,
    /// Optional avatar reference for the report header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
    /// The hourly rate used for the salary figure (zero when absent).
    pub hourly_rate: f64,
    /// The calendar month (1-12).
    pub month: u8,
    /// The four-digit calendar year.
    pub year: u16,
    /// Display label for the period, e.g. `"May 2025"`.
    pub period_label: String,
    /// Sum of hours across the period.
    pub total_hours: f64,
    /// Count of days whose status is exactly `"Present"`.
    pub working_days: usize,
    /// Average hours per working day, zero when there are none.
    pub average_daily_hours: f64,
    /// The derived salary, rendered to two decimal places.
    pub monthly_salary: String,
    /// The daily breakdown, sorted ascending by date.
    pub records: Vec<DailyAttendanceRow>,
}

/// One row in the monthly attendance sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRowResponse {
    /// The normalized employee identifier.
    pub employee_id: String,
    /// The employee's display name, or `"Unknown"` for identifiers the
    /// directory no longer carries.
    pub display_name: String,
    /// The calendar date, rendered as `YYYY-MM-DD`.
    pub date: String,
    /// Formatted check-in time, or `"N/A"`.
    pub check_in: String,
    /// Formatted check-out time, or `"N/A"`.
    pub check_out: String,
    /// The day's hours (ledger value, zero when absent).
    pub hours: f64,
    /// The day's status label, verbatim from the ledger.
    pub status: String,
}

/// Response for the monthly attendance sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAttendanceResponse {
    /// The calendar month (1-12).
    pub month: u8,
    /// The four-digit calendar year.
    pub year: u16,
    /// Display label for the period, e.g. `"May 2025"`.
    pub period_label: String,
    /// All records of the period, sorted ascending by date.
    pub rows: Vec<AttendanceRowResponse>,
}

/// One employee's row in the payroll overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRowResponse {
    /// The normalized employee identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub display_name: String,
    /// Optional avatar reference for the overview table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
    /// The hourly rate used for the salary figure (zero when absent).
    pub hourly_rate: f64,
    /// The period's total hours, rounded to two decimal places.
    pub total_monthly_hours: f64,
    /// The derived salary, rendered to two decimal places.
    pub monthly_salary: String,
}

/// Response for the payroll overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollOverviewResponse {
    /// The calendar month (1-12).
    pub month: u8,
    /// The four-digit calendar year.
    pub year: u16,
    /// Display label for the period, e.g. `"May 2025"`.
    pub period_label: String,
    /// Whether any entry carries hours for the period. False signals the
    /// caller's "no salary data for this period" state.
    pub has_data: bool,
    /// One row per directory employee, including zero-hour employees.
    pub rows: Vec<PayrollRowResponse>,
}
