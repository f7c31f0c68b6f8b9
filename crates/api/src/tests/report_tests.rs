// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{make_employee, make_record, make_timed_record, test_directory};
use crate::{
    ApiError, EmployeeReportRequest, EmployeeReportResponse, MonthlyAttendanceRequest,
    MonthlyAttendanceResponse, employee_report, monthly_attendance,
};
use hr_connect_domain::{AttendanceRecord, Employee};
use time::macros::date;

fn may_request(employee_id: &str) -> EmployeeReportRequest {
    EmployeeReportRequest {
        employee_id: employee_id.to_owned(),
        month: 5,
        year: 2025,
    }
}

#[test]
fn test_employee_report_success() {
    let directory: Vec<Employee> = test_directory();
    let ledger: Vec<AttendanceRecord> = vec![
        make_record("emp1", date!(2025 - 05 - 01), Some(8.0), "Present"),
        make_record("emp1", date!(2025 - 05 - 02), Some(4.0), "Absent"),
        make_record("emp2", date!(2025 - 05 - 01), Some(6.0), "Present"),
    ];

    let response: EmployeeReportResponse =
        employee_report(&directory, &ledger, &may_request("emp1")).unwrap();

    assert_eq!(response.employee_id, "emp1");
    assert_eq!(response.display_name, "Alice Smith");
    assert_eq!(response.hourly_rate, 25.0);
    assert_eq!(response.period_label, "May 2025");
    assert_eq!(response.total_hours, 12.0);
    assert_eq!(response.working_days, 1);
    assert_eq!(response.average_daily_hours, 12.0);
    assert_eq!(response.monthly_salary, "300.00");
    assert_eq!(response.records.len(), 2);
}

#[test]
fn test_employee_report_unknown_employee() {
    let directory: Vec<Employee> = test_directory();

    let result = employee_report(&directory, &[], &may_request("ghost"));

    match result.unwrap_err() {
        ApiError::ResourceNotFound { resource_type, .. } => {
            assert_eq!(resource_type, "Employee");
        }
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_employee_report_invalid_month() {
    let directory: Vec<Employee> = test_directory();
    let request: EmployeeReportRequest = EmployeeReportRequest {
        employee_id: String::from("emp1"),
        month: 13,
        year: 2025,
    };

    let result = employee_report(&directory, &[], &request);

    match result.unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "month"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_employee_report_zero_records_is_valid() {
    let directory: Vec<Employee> = test_directory();

    let response: EmployeeReportResponse =
        employee_report(&directory, &[], &may_request("emp1")).unwrap();

    assert_eq!(response.total_hours, 0.0);
    assert_eq!(response.working_days, 0);
    assert_eq!(response.average_daily_hours, 0.0);
    assert_eq!(response.monthly_salary, "0.00");
    assert!(response.records.is_empty());
}

#[test]
fn test_employee_report_normalizes_identifier() {
    // A numeric directory identifier still resolves from a string request.
    let directory: Vec<Employee> = vec![make_employee("7", "Diana Prince", Some(28.0))];
    let ledger: Vec<AttendanceRecord> =
        vec![make_record("7", date!(2025 - 05 - 05), Some(8.0), "Present")];

    let response: EmployeeReportResponse =
        employee_report(&directory, &ledger, &may_request(" 7 ")).unwrap();

    assert_eq!(response.total_hours, 8.0);
    assert_eq!(response.monthly_salary, "224.00");
}

#[test]
fn test_employee_report_formats_clock_times() {
    let directory: Vec<Employee> = test_directory();
    let ledger: Vec<AttendanceRecord> = vec![
        make_timed_record(
            "emp1",
            date!(2025 - 05 - 01),
            "2025-05-01T09:30:00",
            "2025-05-01T17:45:00",
            8.25,
        ),
        make_record("emp1", date!(2025 - 05 - 02), Some(0.0), "Absent"),
    ];

    let response: EmployeeReportResponse =
        employee_report(&directory, &ledger, &may_request("emp1")).unwrap();

    assert_eq!(response.records[0].check_in, "09:30 AM");
    assert_eq!(response.records[0].check_out, "05:45 PM");
    assert_eq!(response.records[1].check_in, "N/A");
    assert_eq!(response.records[1].check_out, "N/A");
}

#[test]
fn test_employee_report_rows_sorted_by_date() {
    let directory: Vec<Employee> = test_directory();
    let ledger: Vec<AttendanceRecord> = vec![
        make_record("emp1", date!(2025 - 05 - 20), Some(8.0), "Present"),
        make_record("emp1", date!(2025 - 05 - 02), Some(8.0), "Present"),
        make_record("emp1", date!(2025 - 05 - 11), Some(8.0), "Present"),
    ];

    let response: EmployeeReportResponse =
        employee_report(&directory, &ledger, &may_request("emp1")).unwrap();

    let dates: Vec<&str> = response
        .records
        .iter()
        .map(|row| row.date.as_str())
        .collect();
    assert_eq!(dates, vec!["2025-05-02", "2025-05-11", "2025-05-20"]);
}

#[test]
fn test_monthly_attendance_sorted_and_labeled() {
    let directory: Vec<Employee> = test_directory();
    let ledger: Vec<AttendanceRecord> = vec![
        make_record("emp2", date!(2025 - 05 - 03), Some(7.0), "Present"),
        make_record("emp1", date!(2025 - 05 - 01), Some(8.0), "Present"),
        make_record("emp1", date!(2025 - 06 - 01), Some(8.0), "Present"),
    ];
    let request: MonthlyAttendanceRequest = MonthlyAttendanceRequest {
        month: 5,
        year: 2025,
    };

    let response: MonthlyAttendanceResponse =
        monthly_attendance(&directory, &ledger, &request).unwrap();

    assert_eq!(response.period_label, "May 2025");
    assert_eq!(response.rows.len(), 2);
    assert_eq!(response.rows[0].date, "2025-05-01");
    assert_eq!(response.rows[0].display_name, "Alice Smith");
    assert_eq!(response.rows[1].display_name, "Bob Johnson");
}

#[test]
fn test_monthly_attendance_stale_identifier_listed_as_unknown() {
    let directory: Vec<Employee> = test_directory();
    let ledger: Vec<AttendanceRecord> =
        vec![make_record("archived-99", date!(2025 - 05 - 01), Some(8.0), "Present")];
    let request: MonthlyAttendanceRequest = MonthlyAttendanceRequest {
        month: 5,
        year: 2025,
    };

    let response: MonthlyAttendanceResponse =
        monthly_attendance(&directory, &ledger, &request).unwrap();

    assert_eq!(response.rows.len(), 1);
    assert_eq!(response.rows[0].display_name, "Unknown");
}

#[test]
fn test_monthly_attendance_invalid_month() {
    let request: MonthlyAttendanceRequest = MonthlyAttendanceRequest {
        month: 0,
        year: 2025,
    };

    let result = monthly_attendance(&[], &[], &request);

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { .. }
    ));
}
