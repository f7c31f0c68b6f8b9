// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payroll overview calculation across the whole directory.
//!
//! This module provides the multi-employee view over the attendance
//! ledger: one running accumulator per directory employee, a single pass
//! over the ledger, and one display-ready entry per employee. Only the
//! aggregate totals are computed here; the per-day breakdown belongs to
//! the single-employee report.

use crate::lenient;
use crate::period::ReportPeriod;
use crate::types::{AttendanceRecord, Employee, EmployeeId};
use serde::Serialize;
use std::collections::HashMap;

/// One employee's row in the payroll overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollEntry {
    /// The employee the entry describes.
    pub employee: Employee,
    /// The period's total hours, rounded to two decimal places.
    ///
    /// Unlike the single-employee salary string this stays numeric so the
    /// consuming table can sort on it.
    pub total_monthly_hours: f64,
    /// `total_monthly_hours * hourly_rate`, rendered to two decimal places.
    pub monthly_salary: String,
}

/// Builds the payroll overview for every employee in the directory.
///
/// Every directory employee appears in the output exactly once, seeded at
/// zero hours, even with no attendance records for the period; omission
/// would be a defect. Ledger records referencing identifiers not present
/// in the directory are silently ignored: the two collections evolve
/// independently and the ledger may reference archived employees.
///
/// The output carries one entry per input employee in directory order; no
/// ordering beyond completeness is guaranteed to callers, which apply
/// their own sort.
///
/// # Arguments
///
/// * `all_employees` - The employee directory
/// * `all_records` - The full attendance ledger
/// * `period` - The reporting month
#[must_use]
pub fn build_payroll_overview(
    all_employees: &[Employee],
    all_records: &[AttendanceRecord],
    period: ReportPeriod,
) -> Vec<PayrollEntry> {
    let mut accumulators: HashMap<EmployeeId, f64> = all_employees
        .iter()
        .map(|employee| (employee.id.clone(), 0.0))
        .collect();

    for record in all_records {
        if !period.contains(record.date) {
            continue;
        }
        // Unknown employee identifiers fall through untouched.
        if let Some(total) = accumulators.get_mut(&record.employee_id) {
            *total += lenient::hours_or_zero(record);
        }
    }

    all_employees
        .iter()
        .map(|employee| {
            let raw_total: f64 = accumulators.get(&employee.id).copied().unwrap_or(0.0);
            let total_monthly_hours: f64 = round_to_hundredths(raw_total);
            let monthly_salary: String = format!(
                "{:.2}",
                total_monthly_hours * lenient::rate_or_zero(employee)
            );
            PayrollEntry {
                employee: employee.clone(),
                total_monthly_hours,
                monthly_salary,
            }
        })
        .collect()
}

/// Returns whether an overview carries no salary data at all.
///
/// True when the overview is empty or every entry has zero hours. Callers
/// surface this as a distinct "no salary data for this period" state, not
/// a computation error.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn overview_has_no_data(entries: &[PayrollEntry]) -> bool {
    entries
        .iter()
        .all(|entry| entry.total_monthly_hours == 0.0)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
