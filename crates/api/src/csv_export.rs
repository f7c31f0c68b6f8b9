// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV rendering of the computed report models.
//!
//! The export collaborator consumes fully-computed, display-ready models;
//! this module turns them into CSV text. Nothing here recomputes a
//! metric: every figure is taken from the response as-is.

use crate::request_response::{
    EmployeeReportResponse, MonthlyAttendanceResponse, PayrollOverviewResponse,
};
use csv::WriterBuilder;
use thiserror::Error;

/// CSV rendering errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A row failed to serialize.
    #[error("Failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),

    /// The writer could not be finalized.
    #[error("Failed to finalize CSV output: {0}")]
    Finish(String),

    /// The rendered bytes were not valid UTF-8.
    #[error("Rendered CSV was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders a single-employee report: a summary block followed by the
/// daily breakdown table.
///
/// # Errors
///
/// Returns an error if a row fails to serialize or the output cannot be
/// finalized.
pub fn report_to_csv(report: &EmployeeReportResponse) -> Result<String, ExportError> {
    // Summary rows and table rows have different widths.
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record(["Employee", report.display_name.as_str()])?;
    writer.write_record(["Period", report.period_label.as_str()])?;
    writer.write_record(["Hourly Rate", report.hourly_rate.to_string().as_str()])?;
    writer.write_record(["Total Working Days", report.working_days.to_string().as_str()])?;
    writer.write_record(["Total Hours Spent", report.total_hours.to_string().as_str()])?;
    writer.write_record([
        "Average Daily Hours",
        report.average_daily_hours.to_string().as_str(),
    ])?;
    writer.write_record(["Calculated Monthly Salary", report.monthly_salary.as_str()])?;
    writer.write_record([""])?;

    writer.write_record(["Date", "Check-In", "Check-Out", "Hours", "Status"])?;
    for row in &report.records {
        let hours: String = row.hours.to_string();
        writer.write_record([
            row.date.as_str(),
            row.check_in.as_str(),
            row.check_out.as_str(),
            hours.as_str(),
            row.status.as_str(),
        ])?;
    }

    finish(writer)
}

/// Renders the monthly attendance sheet with the classic export columns.
///
/// # Errors
///
/// Returns an error if a row fails to serialize or the output cannot be
/// finalized.
pub fn attendance_to_csv(sheet: &MonthlyAttendanceResponse) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record([
        "Sr No.",
        "Employee",
        "Date",
        "Check-In",
        "Check-Out",
        "Hours Spent",
        "Status",
    ])?;
    for (index, row) in sheet.rows.iter().enumerate() {
        let serial: String = (index + 1).to_string();
        let hours: String = row.hours.to_string();
        writer.write_record([
            serial.as_str(),
            row.display_name.as_str(),
            row.date.as_str(),
            row.check_in.as_str(),
            row.check_out.as_str(),
            hours.as_str(),
            row.status.as_str(),
        ])?;
    }

    finish(writer)
}

/// Renders the payroll overview table.
///
/// # Errors
///
/// Returns an error if a row fails to serialize or the output cannot be
/// finalized.
pub fn payroll_to_csv(overview: &PayrollOverviewResponse) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record([
        "Employee",
        "Hourly Rate",
        "Total Hours (Month)",
        "Calculated Salary",
    ])?;
    for row in &overview.rows {
        let rate: String = row.hourly_rate.to_string();
        let hours: String = row.total_monthly_hours.to_string();
        writer.write_record([
            row.display_name.as_str(),
            rate.as_str(),
            hours.as_str(),
            row.monthly_salary.as_str(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| ExportError::Finish(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
