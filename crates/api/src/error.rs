// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use hr_connect_domain::DomainError;

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// The aggregation core itself never fails; API errors cover caller
/// precondition failures (bad period parameters, unknown employee) only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly through the API contract.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidMonth { month } => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid report month: {month}. Must be between 1 and 12"),
        },
        DomainError::InvalidYear { year } => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Invalid report year: {year}. Must be a four-digit calendar year"),
        },
    }
}
