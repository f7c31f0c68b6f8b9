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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use hr_connect_api::{
    ApiError, EmployeeReportRequest, EmployeeReportResponse, ExportError,
    MonthlyAttendanceRequest, MonthlyAttendanceResponse, PayrollOverviewRequest,
    PayrollOverviewResponse, attendance_to_csv, employee_report, monthly_attendance,
    payroll_overview, payroll_to_csv, report_to_csv,
};
use hr_connect_domain::{AttendanceRecord, Employee};

/// HR Connect Server - HTTP server for attendance and payroll reporting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the employee directory JSON file
    #[arg(short, long)]
    directory: String,

    /// Path to the attendance ledger JSON file
    #[arg(short, long)]
    ledger: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Both collections are read-only for the lifetime of the process. The
/// report builders never mutate their inputs and every request computes
/// an independent result, so plain `Arc` sharing suffices; no locking
/// discipline is required.
#[derive(Clone)]
struct AppState {
    /// The employee directory.
    directory: Arc<Vec<Employee>>,
    /// The attendance ledger.
    ledger: Arc<Vec<AttendanceRecord>>,
}

/// Query parameters identifying a reporting month.
#[derive(Debug, Deserialize)]
struct PeriodQuery {
    /// The calendar month (1-12).
    month: u8,
    /// The four-digit calendar year.
    year: u16,
}

/// Query parameters for the single-employee report endpoints.
#[derive(Debug, Deserialize)]
struct EmployeeReportQuery {
    /// The employee identifier.
    employee_id: String,
    /// The calendar month (1-12).
    month: u8,
    /// The four-digit calendar year.
    year: u16,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
        }
    }
}

impl From<ExportError> for HttpError {
    fn from(err: ExportError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Builds a `text/csv` download response.
fn csv_response(filename: &str, body: String) -> Response {
    let disposition: String = format!("attachment; filename=\"{filename}\"");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, String::from("text/csv")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// Sanitizes a display name for use in a download filename.
fn filename_fragment(display_name: &str) -> String {
    display_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Handler for GET `/employees` endpoint.
///
/// Lists the employee directory.
async fn handle_list_employees(AxumState(state): AxumState<AppState>) -> Json<Vec<Employee>> {
    info!(count = state.directory.len(), "Handling list_employees request");

    Json(state.directory.as_ref().clone())
}

/// Handler for GET `/attendance` endpoint.
///
/// Returns the attendance sheet for one month.
async fn handle_monthly_attendance(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<MonthlyAttendanceResponse>, HttpError> {
    info!(
        month = query.month,
        year = query.year,
        "Handling monthly_attendance request"
    );

    let request: MonthlyAttendanceRequest = MonthlyAttendanceRequest {
        month: query.month,
        year: query.year,
    };
    let response: MonthlyAttendanceResponse =
        monthly_attendance(&state.directory, &state.ledger, &request)?;

    Ok(Json(response))
}

/// Handler for GET `/attendance/csv` endpoint.
///
/// Returns the monthly attendance sheet as a CSV download.
async fn handle_monthly_attendance_csv(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, HttpError> {
    info!(
        month = query.month,
        year = query.year,
        "Handling monthly_attendance_csv request"
    );

    let request: MonthlyAttendanceRequest = MonthlyAttendanceRequest {
        month: query.month,
        year: query.year,
    };
    let response: MonthlyAttendanceResponse =
        monthly_attendance(&state.directory, &state.ledger, &request)?;
    let body: String = attendance_to_csv(&response)?;

    let filename: String = format!("Attendance-{}-{:02}.csv", response.year, response.month);
    Ok(csv_response(&filename, body))
}

/// Handler for GET `/reports/employee` endpoint.
///
/// Returns the monthly report for one employee.
async fn handle_employee_report(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<EmployeeReportQuery>,
) -> Result<Json<EmployeeReportResponse>, HttpError> {
    info!(
        employee_id = %query.employee_id,
        month = query.month,
        year = query.year,
        "Handling employee_report request"
    );

    let request: EmployeeReportRequest = EmployeeReportRequest {
        employee_id: query.employee_id,
        month: query.month,
        year: query.year,
    };
    let response: EmployeeReportResponse =
        employee_report(&state.directory, &state.ledger, &request)?;

    Ok(Json(response))
}

/// Handler for GET `/reports/employee/csv` endpoint.
///
/// Returns the monthly report for one employee as a CSV download. The
/// filename derives from the employee's display name and the period.
async fn handle_employee_report_csv(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<EmployeeReportQuery>,
) -> Result<Response, HttpError> {
    info!(
        employee_id = %query.employee_id,
        month = query.month,
        year = query.year,
        "Handling employee_report_csv request"
    );

    let request: EmployeeReportRequest = EmployeeReportRequest {
        employee_id: query.employee_id,
        month: query.month,
        year: query.year,
    };
    let response: EmployeeReportResponse =
        employee_report(&state.directory, &state.ledger, &request)?;
    let body: String = report_to_csv(&response)?;

    let filename: String = format!(
        "{}-{}-{:02}.csv",
        filename_fragment(&response.display_name),
        response.year,
        response.month
    );
    Ok(csv_response(&filename, body))
}

/// Handler for GET `/reports/payroll` endpoint.
///
/// Returns the payroll overview for one month.
async fn handle_payroll_overview(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<PayrollOverviewResponse>, HttpError> {
    info!(
        month = query.month,
        year = query.year,
        "Handling payroll_overview request"
    );

    let request: PayrollOverviewRequest = PayrollOverviewRequest {
        month: query.month,
        year: query.year,
    };
    let response: PayrollOverviewResponse =
        payroll_overview(&state.directory, &state.ledger, &request)?;

    Ok(Json(response))
}

/// Handler for GET `/reports/payroll/csv` endpoint.
///
/// Returns the payroll overview as a CSV download.
async fn handle_payroll_overview_csv(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, HttpError> {
    info!(
        month = query.month,
        year = query.year,
        "Handling payroll_overview_csv request"
    );

    let request: PayrollOverviewRequest = PayrollOverviewRequest {
        month: query.month,
        year: query.year,
    };
    let response: PayrollOverviewResponse =
        payroll_overview(&state.directory, &state.ledger, &request)?;
    let body: String = payroll_to_csv(&response)?;

    let filename: String = format!("Payroll-{}-{:02}.csv", response.year, response.month);
    Ok(csv_response(&filename, body))
}

/// Builds the application router with all endpoints.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(handle_list_employees))
        .route("/attendance", get(handle_monthly_attendance))
        .route("/attendance/csv", get(handle_monthly_attendance_csv))
        .route("/reports/employee", get(handle_employee_report))
        .route("/reports/employee/csv", get(handle_employee_report_csv))
        .route("/reports/payroll", get(handle_payroll_overview))
        .route("/reports/payroll/csv", get(handle_payroll_overview_csv))
        .with_state(state)
}

/// Loads the employee directory from a JSON file.
fn load_directory(path: &Path) -> Result<Vec<Employee>, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let directory: Vec<Employee> = serde_json::from_str(&contents)?;
    Ok(directory)
}

/// Loads the attendance ledger from a JSON file.
fn load_ledger(path: &Path) -> Result<Vec<AttendanceRecord>, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let ledger: Vec<AttendanceRecord> = serde_json::from_str(&contents)?;
    Ok(ledger)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing HR Connect Server");

    let directory: Vec<Employee> = load_directory(Path::new(&args.directory))?;
    let ledger: Vec<AttendanceRecord> = load_ledger(Path::new(&args.ledger))?;
    info!(
        employees = directory.len(),
        records = ledger.len(),
        "Loaded collaborator collections"
    );

    let state: AppState = AppState {
        directory: Arc::new(directory),
        ledger: Arc::new(ledger),
    };

    // Build router
    let app: Router = build_router(state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
