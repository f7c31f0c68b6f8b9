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
    clippy::all
)]

mod csv_export;
mod error;
mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_export::{ExportError, attendance_to_csv, payroll_to_csv, report_to_csv};
pub use error::{ApiError, ApiResult, translate_domain_error};
pub use reports::{employee_report, monthly_attendance, payroll_overview};
pub use request_response::{
    AttendanceRowResponse, DailyAttendanceRow, EmployeeReportRequest, EmployeeReportResponse,
    MonthlyAttendanceRequest, MonthlyAttendanceResponse, PayrollOverviewRequest,
    PayrollOverviewResponse, PayrollRowResponse,
};
