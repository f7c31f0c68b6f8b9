// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report assembly over the in-memory collaborator collections.
//!
//! These operations are the API boundary over the domain builders: they
//! validate caller input, resolve directory lookups, and turn the computed
//! models into display-ready responses. They hold no state and never
//! mutate the collections; concurrent calls are safe by construction.

use crate::error::{ApiError, ApiResult, translate_domain_error};
use crate::request_response::{
    AttendanceRowResponse, DailyAttendanceRow, EmployeeReportRequest, EmployeeReportResponse,
    MonthlyAttendanceRequest, MonthlyAttendanceResponse, PayrollOverviewRequest,
    PayrollOverviewResponse, PayrollRowResponse,
};
use hr_connect_domain::{
    AttendanceRecord, Employee, EmployeeId, EmployeeMonthlyReport, PayrollEntry, ReportPeriod,
    build_payroll_overview, build_report, format_clock_time, hours_or_zero, overview_has_no_data,
    rate_or_zero,
};
use tracing::debug;

/// Display name substituted for ledger identifiers the directory no
/// longer carries.
const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// Builds the monthly report for one employee.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an out-of-range period and
/// `ApiError::ResourceNotFound` when the employee is not in the
/// directory. An employee with zero matching records is a valid
/// zero-valued report, not an error.
pub fn employee_report(
    directory: &[Employee],
    ledger: &[AttendanceRecord],
    request: &EmployeeReportRequest,
) -> ApiResult<EmployeeReportResponse> {
    let period: ReportPeriod =
        ReportPeriod::new(request.month, request.year).map_err(translate_domain_error)?;

    let wanted: EmployeeId = EmployeeId::new(&request.employee_id);
    let Some(employee) = directory.iter().find(|employee| employee.id == wanted) else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee '{}' is not in the directory", request.employee_id),
        });
    };

    let report: EmployeeMonthlyReport = build_report(employee, ledger, period);
    debug!(
        employee_id = %report.employee.id,
        records = report.records.len(),
        "Built employee monthly report"
    );

    Ok(report_to_response(&report))
}

/// Builds the attendance sheet for one month across all employees.
///
/// Rows are sorted ascending by date. Identifiers the directory no longer
/// carries are still listed, with an `"Unknown"` display name; the ledger
/// and directory evolve independently.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an out-of-range period.
pub fn monthly_attendance(
    directory: &[Employee],
    ledger: &[AttendanceRecord],
    request: &MonthlyAttendanceRequest,
) -> ApiResult<MonthlyAttendanceResponse> {
    let period: ReportPeriod =
        ReportPeriod::new(request.month, request.year).map_err(translate_domain_error)?;

    let mut matching: Vec<&AttendanceRecord> = ledger
        .iter()
        .filter(|record| period.contains(record.date))
        .collect();
    matching.sort_by_key(|record| record.date);

    let rows: Vec<AttendanceRowResponse> = matching
        .into_iter()
        .map(|record| {
            let display_name: String = directory
                .iter()
                .find(|employee| employee.id == record.employee_id)
                .map_or_else(
                    || String::from(UNKNOWN_EMPLOYEE),
                    |employee| employee.display_name.clone(),
                );
            AttendanceRowResponse {
                employee_id: record.employee_id.value().to_owned(),
                display_name,
                date: record.date.to_string(),
                check_in: format_clock_time(record.first_check_in.as_deref()),
                check_out: format_clock_time(record.last_check_out.as_deref()),
                hours: hours_or_zero(record),
                status: record.status.label().to_owned(),
            }
        })
        .collect();

    debug!(rows = rows.len(), "Built monthly attendance sheet");

    Ok(MonthlyAttendanceResponse {
        month: period.month(),
        year: period.year(),
        period_label: period.label(),
        rows,
    })
}

/// Builds the payroll overview for one month across the whole directory.
///
/// An empty directory yields an empty overview with `has_data == false`;
/// that is the caller's "no salary data" state, not an error.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an out-of-range period.
pub fn payroll_overview(
    directory: &[Employee],
    ledger: &[AttendanceRecord],
    request: &PayrollOverviewRequest,
) -> ApiResult<PayrollOverviewResponse> {
    let period: ReportPeriod =
        ReportPeriod::new(request.month, request.year).map_err(translate_domain_error)?;

    let entries: Vec<PayrollEntry> = build_payroll_overview(directory, ledger, period);
    let has_data: bool = !overview_has_no_data(&entries);

    let rows: Vec<PayrollRowResponse> = entries
        .into_iter()
        .map(|entry| PayrollRowResponse {
            employee_id: entry.employee.id.value().to_owned(),
            display_name: entry.employee.display_name.clone(),
            avatar_ref: entry.employee.avatar_ref.clone(),
            hourly_rate: rate_or_zero(&entry.employee),
            total_monthly_hours: entry.total_monthly_hours,
            monthly_salary: entry.monthly_salary,
        })
        .collect();

    debug!(rows = rows.len(), has_data, "Built payroll overview");

    Ok(PayrollOverviewResponse {
        month: period.month(),
        year: period.year(),
        period_label: period.label(),
        has_data,
        rows,
    })
}

/// Converts a computed report into its display-ready response.
fn report_to_response(report: &EmployeeMonthlyReport) -> EmployeeReportResponse {
    let records: Vec<DailyAttendanceRow> = report
        .records
        .iter()
        .map(|record| DailyAttendanceRow {
            date: record.date.to_string(),
            check_in: format_clock_time(record.first_check_in.as_deref()),
            check_out: format_clock_time(record.last_check_out.as_deref()),
            hours: hours_or_zero(record),
            status: record.status.label().to_owned(),
        })
        .collect();

    EmployeeReportResponse {
        employee_id: report.employee.id.value().to_owned(),
        display_name: report.employee.display_name.clone(),
        avatar_ref: report.employee.avatar_ref.clone(),
        hourly_rate: rate_or_zero(&report.employee),
        month: report.period.month(),
        year: report.period.year(),
        period_label: report.period.label(),
        total_hours: report.total_hours,
        working_days: report.working_days,
        average_daily_hours: report.average_daily_hours,
        monthly_salary: report.monthly_salary.clone(),
        records,
    }
}
