// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use hr_connect_domain::{AttendanceRecord, AttendanceStatus, Employee, EmployeeId};
use time::Date;

pub fn make_employee(id: &str, name: &str, rate: Option<f64>) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        display_name: name.to_owned(),
        hourly_rate: rate,
        avatar_ref: None,
    }
}

pub fn make_record(id: &str, date: Date, hours: Option<f64>, status: &str) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: EmployeeId::new(id),
        date,
        first_check_in: None,
        last_check_out: None,
        total_duration_hours: hours,
        status: AttendanceStatus::new(status),
    }
}

pub fn make_timed_record(
    id: &str,
    date: Date,
    check_in: &str,
    check_out: &str,
    hours: f64,
) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: EmployeeId::new(id),
        date,
        first_check_in: Some(check_in.to_owned()),
        last_check_out: Some(check_out.to_owned()),
        total_duration_hours: Some(hours),
        status: AttendanceStatus::new("Present"),
    }
}

pub fn test_directory() -> Vec<Employee> {
    vec![
        make_employee("emp1", "Alice Smith", Some(25.0)),
        make_employee("emp2", "Bob Johnson", Some(30.0)),
        make_employee("emp3", "Charlie Brown", Some(20.0)),
    ]
}
