// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-employee monthly report calculation.
//!
//! This module provides the pure, deterministic per-employee view over the
//! attendance ledger: filter one employee's records down to one reporting
//! month, then derive summary metrics and a date-sorted daily breakdown.

use crate::lenient;
use crate::period::ReportPeriod;
use crate::types::{AttendanceRecord, Employee};
use serde::Serialize;

/// The computed monthly report for a single employee.
///
/// Reports are computed fresh on every query and never persisted. A new
/// query produces a new value; there is no shared mutable report object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeMonthlyReport {
    /// The employee the report describes.
    pub employee: Employee,
    /// The reporting month used as the filter.
    pub period: ReportPeriod,
    /// The employee's records for the period, sorted ascending by date.
    pub records: Vec<AttendanceRecord>,
    /// Sum of precomputed duration hours across `records`.
    pub total_hours: f64,
    /// Count of records whose status is exactly `"Present"`.
    pub working_days: usize,
    /// `total_hours / working_days`, or zero when there are no working days.
    pub average_daily_hours: f64,
    /// `total_hours * hourly_rate`, rendered to two decimal places.
    pub monthly_salary: String,
}

/// Builds the monthly report for a single employee.
///
/// This is a pure function of its inputs: no side effects, no hidden
/// state, and identical inputs yield identical output. Zero matching
/// records is a valid zero-valued result, not an error; the distinct
/// "no employee selected" precondition belongs to the caller.
///
/// # Arguments
///
/// * `employee` - The employee to report on
/// * `all_records` - The full attendance ledger (any employee, any date)
/// * `period` - The reporting month
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_report(
    employee: &Employee,
    all_records: &[AttendanceRecord],
    period: ReportPeriod,
) -> EmployeeMonthlyReport {
    let mut records: Vec<AttendanceRecord> = all_records
        .iter()
        .filter(|record| record.employee_id == employee.id && period.contains(record.date))
        .cloned()
        .collect();

    // Sort key is the calendar date, not insertion order.
    records.sort_by_key(|record| record.date);

    let total_hours: f64 = records.iter().map(lenient::hours_or_zero).sum();
    let working_days: usize = records
        .iter()
        .filter(|record| record.status.is_present())
        .count();
    let average_daily_hours: f64 = if working_days == 0 {
        0.0
    } else {
        total_hours / working_days as f64
    };
    let monthly_salary: String = format!("{:.2}", total_hours * lenient::rate_or_zero(employee));

    EmployeeMonthlyReport {
        employee: employee.clone(),
        period,
        records,
        total_hours,
        working_days,
        average_daily_hours,
        monthly_salary,
    }
}
