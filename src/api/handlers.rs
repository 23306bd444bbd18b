//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::models::{AttendanceRecord, Employee, PayPeriod};
use crate::report::{attendance_report, period_csv, period_totals, punctuality_ranking};

use super::request::{
    AttendanceQuery, AttendanceRequest, EmployeeQuery, EmployeeRequest, PeriodRequest, ReportQuery,
};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceReportResponse, PeriodDetailResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/attendance", get(list_attendance).post(create_attendance))
        .route("/periods", get(list_periods).post(create_period))
        .route("/periods/:id", get(period_detail).delete(delete_period))
        .route("/periods/:id/calculate", post(calculate_period))
        .route("/periods/:id/export", get(export_period))
        .route("/config", get(get_config).put(put_config))
        .route("/reports/attendance", get(attendance_report_handler))
        .with_state(state)
}

/// Turns a body rejection into the API error envelope.
fn json_rejection_error(rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

// ---- employees ----

async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Json<Vec<Employee>> {
    let employees = match query.q.as_deref() {
        Some(q) if !q.trim().is_empty() => state.store().search_employees(q.trim()),
        _ => state.store().list_employees(),
    };
    Json(employees)
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(json_rejection_error)?;
    let employee = request.into_employee(Uuid::new_v4())?;
    state.store().insert_employee(employee.clone())?;
    info!(employee_id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    Ok(Json(state.store().get_employee(id)?))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    let Json(request) = payload.map_err(json_rejection_error)?;
    let employee = request.into_employee(id)?;
    state.store().update_employee(employee.clone())?;
    Ok(Json(employee))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.store().remove_employee(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- attendance ----

async fn create_attendance(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(json_rejection_error)?;

    // Lateness is derived against the employee's scheduled start.
    let employee = state.store().get_employee(request.employee_id)?;
    let clock_in = request
        .clock_in
        .as_deref()
        .map(crate::calculation::parse_hhmm)
        .transpose()?;
    let clock_out = request
        .clock_out
        .as_deref()
        .map(crate::calculation::parse_hhmm)
        .transpose()?;

    let record = AttendanceRecord::new(
        employee.id,
        request.date,
        clock_in,
        clock_out,
        employee.scheduled_start,
    );
    state.store().insert_attendance(record.clone())?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Json<Vec<AttendanceRecord>> {
    Json(
        state
            .store()
            .attendance_in_range(query.from, query.to, query.employee_id),
    )
}

// ---- periods ----

async fn create_period(
    State(state): State<AppState>,
    payload: Result<Json<PeriodRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(json_rejection_error)?;
    let period = PayPeriod::new(request.name, request.start_date, request.end_date)?;
    state.store().insert_period(period.clone());
    info!(period_id = %period.id, "Pay period created");
    Ok((StatusCode::CREATED, Json(period)))
}

async fn list_periods(State(state): State<AppState>) -> Json<Vec<PayPeriod>> {
    Json(state.store().list_periods())
}

async fn period_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PeriodDetailResponse>, ApiErrorResponse> {
    let period = state.store().get_period(id)?;
    let items = state.store().items_for_period(id)?;
    let totals = period_totals(&items);
    let currency = state.store().config()?.currency;
    Ok(Json(PeriodDetailResponse {
        period,
        items,
        totals,
        currency,
    }))
}

async fn delete_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.store().remove_period(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn calculate_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PeriodDetailResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, period_id = %id, "Calculating pay period");

    let items = state.store().recalculate_period(id).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
    })?;

    let totals = period_totals(&items);
    info!(
        correlation_id = %correlation_id,
        period_id = %id,
        items = items.len(),
        total_gross = %totals.gross,
        total_net = %totals.net,
        "Calculation completed"
    );

    let period = state.store().get_period(id)?;
    let currency = state.store().config()?.currency;
    Ok(Json(PeriodDetailResponse {
        period,
        items,
        totals,
        currency,
    }))
}

async fn export_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let period = state.store().get_period(id)?;
    let items = state.store().items_for_period(id)?;
    let csv = period_csv(&items)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"nomina_{}.csv\"", period.id),
            ),
        ],
        csv,
    ))
}

// ---- configuration ----

async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<PayrollConfig>, ApiErrorResponse> {
    Ok(Json(state.store().config()?))
}

async fn put_config(
    State(state): State<AppState>,
    payload: Result<Json<PayrollConfig>, JsonRejection>,
) -> Result<Json<PayrollConfig>, ApiErrorResponse> {
    let Json(config) = payload.map_err(json_rejection_error)?;
    info!(
        deductions = config.deductions.len(),
        taxes = config.taxes.len(),
        "Configuration updated"
    );
    state.store().set_config(config.clone());
    Ok(Json(config))
}

// ---- reports ----

async fn attendance_report_handler(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<AttendanceReportResponse> {
    let employees = state.store().list_employees();
    let records = state
        .store()
        .attendance_in_range(query.from, query.to, None);
    let rows = attendance_report(&employees, &records, query.from, query.to);
    let ranking = punctuality_ranking(&rows);
    Json(AttendanceReportResponse { rows, ranking })
}
