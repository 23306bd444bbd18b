//! Response types for the payroll engine API.
//!
//! This module defines the error envelope and the mapping from engine
//! errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PayPeriod, PayrollItem};
use crate::report::PeriodTotals;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status to respond with.
    pub status: StatusCode,
    /// The error payload.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(err: EngineError) -> Self {
        let (status, code) = match &err {
            EngineError::ConfigNotFound { .. } => (StatusCode::NOT_FOUND, "CONFIG_NOT_FOUND"),
            EngineError::ConfigParseError { .. } => (StatusCode::BAD_REQUEST, "CONFIG_PARSE_ERROR"),
            EngineError::MissingConfiguration => {
                (StatusCode::PRECONDITION_FAILED, "MISSING_CONFIGURATION")
            }
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::PeriodNotFound { .. } => (StatusCode::NOT_FOUND, "PERIOD_NOT_FOUND"),
            EngineError::InvalidPeriod { .. }
            | EngineError::InvalidEmployee { .. }
            | EngineError::InvalidTime { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::CalculationError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CALCULATION_ERROR")
            }
        };

        Self::new(status, ApiError::new(code, err.to_string()))
    }
}

/// Response body for the period detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDetailResponse {
    /// The period itself.
    pub period: PayPeriod,
    /// The period's payroll items (empty until calculated).
    pub items: Vec<PayrollItem>,
    /// Aggregated totals across the items.
    pub totals: PeriodTotals,
    /// Display currency from the active configuration.
    pub currency: String,
}

/// Response body for the attendance report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReportResponse {
    /// Per-employee aggregates in employee input order.
    pub rows: Vec<crate::report::AttendanceSummary>,
    /// The same rows ranked by ascending lateness.
    pub ranking: Vec<crate::report::AttendanceSummary>,
}
