//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for managing employees,
//! attendance, pay periods and configuration, and for triggering payroll
//! calculation, reporting and CSV export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, EmployeeRequest, PeriodRequest};
pub use response::ApiError;
pub use state::AppState;
