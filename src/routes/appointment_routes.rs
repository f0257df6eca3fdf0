// src/routes/appointment_routes.rs

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::ApiError,
    flow,
    models::{
        AppState, Appointment, BookingRequest, OkData, OkResponse, Status, StatusAction,
        StatusCounts, StatusUpdateRequest,
    },
    summary, validation,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment).get(list_appointments))
        .route(
            "/appointments/{appointment_id}",
            get(get_appointment).delete(delete_appointment),
        )
        .route("/appointments/{appointment_id}/status", patch(update_status))
        .route("/appointments/{appointment_id}/summary", get(download_summary))
        .route("/appointments/{appointment_id}/notify", post(send_sms))
}

/* ============================================================
   Response DTOs
   ============================================================ */

#[derive(Debug, Serialize)]
pub struct ApiOk<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct AppointmentDto {
    #[serde(flatten)]
    pub appointment: Appointment,
    /// Transition buttons the caller may offer for this record.
    pub actions: &'static [StatusAction],
}

#[derive(Debug, Serialize)]
pub struct ListData {
    pub appointments: Vec<AppointmentDto>,
    pub stats: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct NotifyData {
    pub ok: bool,
    pub message: String,
}

fn to_dto(appointment: Appointment) -> AppointmentDto {
    let actions = appointment.status.actions();
    AppointmentDto {
        appointment,
        actions,
    }
}

fn ensure_transition(current: Status, requested: Status) -> Result<(), ApiError> {
    if current.can_transition(requested) {
        Ok(())
    } else {
        Err(ApiError::Conflict(
            "INVALID_TRANSITION",
            format!(
                "cannot move a {} appointment to {}",
                current.as_str(),
                requested.as_str()
            ),
        ))
    }
}

async fn fetch_appointment(state: &AppState, appointment_id: Uuid) -> Result<Appointment, ApiError> {
    sqlx::query_as::<_, Appointment>(
        r#"
        SELECT
          id,
          patient_name,
          patient_email,
          patient_phone,
          appointment_date,
          appointment_time,
          department,
          doctor_name,
          symptoms,
          status,
          created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(appointment_id)
    .fetch_optional(&state.db)
    .await
    .map_err(ApiError::db)?
    .ok_or_else(ApiError::not_found)
}

/* ============================================================
   POST /appointments (book)
   ============================================================ */

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<ApiOk<AppointmentDto>>), ApiError> {
    let today = Utc::now().date_naive();
    let errors = validation::validate_booking(&req, today);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    // Cannot fail after validation, but never unwrap on a request path.
    let date = validation::parse_date(&req.appointment_date).ok_or_else(|| {
        ApiError::BadRequest("VALIDATION_ERROR", "appointment_date must be YYYY-MM-DD".into())
    })?;

    let created: Appointment = sqlx::query_as::<_, Appointment>(
        r#"
        INSERT INTO appointments (
          patient_name,
          patient_email,
          patient_phone,
          appointment_date,
          appointment_time,
          department,
          doctor_name,
          symptoms
        )
        VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
        RETURNING
          id, patient_name, patient_email, patient_phone,
          appointment_date, appointment_time, department,
          doctor_name, symptoms, status, created_at
        "#,
    )
    .bind(&req.patient_name)
    .bind(&req.patient_email)
    .bind(&req.patient_phone)
    .bind(date)
    .bind(&req.appointment_time)
    .bind(&req.department)
    .bind(&req.doctor_name)
    .bind(&req.symptoms)
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::db)?;

    tracing::info!(appointment_id = %created.id, "appointment booked");
    Ok((StatusCode::CREATED, Json(ApiOk { data: to_dto(created) })))
}

/* ============================================================
   GET /appointments (list)
   ============================================================ */

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<ApiOk<ListData>>, ApiError> {
    // Search and status filtering stay on the client; the list is always the
    // full authoritative set, newest appointment day first.
    let rows: Vec<Appointment> = sqlx::query_as::<_, Appointment>(
        r#"
        SELECT
          id,
          patient_name,
          patient_email,
          patient_phone,
          appointment_date,
          appointment_time,
          department,
          doctor_name,
          symptoms,
          status,
          created_at
        FROM appointments
        ORDER BY appointment_date DESC, created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::db)?;

    let stats = flow::status_counts(&rows);
    let appointments = rows.into_iter().map(to_dto).collect();

    Ok(Json(ApiOk {
        data: ListData {
            appointments,
            stats,
        },
    }))
}

/* ============================================================
   GET /appointments/{id}
   ============================================================ */

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<ApiOk<AppointmentDto>>, ApiError> {
    let apt = fetch_appointment(&state, appointment_id).await?;
    Ok(Json(ApiOk { data: to_dto(apt) }))
}

/* ============================================================
   PATCH /appointments/{id}/status
   ============================================================ */

pub async fn update_status(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<ApiOk<AppointmentDto>>, ApiError> {
    let current = fetch_appointment(&state, appointment_id).await?;
    ensure_transition(current.status, req.status)?;

    let updated: Appointment = sqlx::query_as::<_, Appointment>(
        r#"
        UPDATE appointments
        SET status = $2
        WHERE id = $1
        RETURNING
          id, patient_name, patient_email, patient_phone,
          appointment_date, appointment_time, department,
          doctor_name, symptoms, status, created_at
        "#,
    )
    .bind(appointment_id)
    .bind(req.status)
    .fetch_optional(&state.db)
    .await
    .map_err(ApiError::db)?
    .ok_or_else(ApiError::not_found)?;

    tracing::info!(
        appointment_id = %appointment_id,
        status = updated.status.as_str(),
        "appointment status updated"
    );
    Ok(Json(ApiOk { data: to_dto(updated) }))
}

/* ============================================================
   DELETE /appointments/{id}
   ============================================================ */

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<OkResponse>, ApiError> {
    // The caller confirms with the user before issuing this request; here the
    // removal is unconditional and permanent.
    let result = sqlx::query(r#"DELETE FROM appointments WHERE id = $1"#)
        .bind(appointment_id)
        .execute(&state.db)
        .await
        .map_err(ApiError::db)?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found());
    }

    tracing::info!(appointment_id = %appointment_id, "appointment deleted");
    Ok(Json(OkResponse {
        data: OkData { ok: true },
    }))
}

/* ============================================================
   GET /appointments/{id}/summary (plain-text download)
   ============================================================ */

pub async fn download_summary(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let apt = fetch_appointment(&state, appointment_id).await?;
    let body = summary::render(&apt);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        summary::download_filename(&apt)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/* ============================================================
   POST /appointments/{id}/notify (simulated SMS)
   ============================================================ */

pub async fn send_sms(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<ApiOk<NotifyData>>, ApiError> {
    let apt = fetch_appointment(&state, appointment_id).await?;

    // Demo scope: acknowledge without dispatching anything.
    tracing::info!(
        appointment_id = %apt.id,
        phone = %apt.patient_phone,
        "simulated SMS confirmation"
    );

    Ok(Json(ApiOk {
        data: NotifyData {
            ok: true,
            message: format!("SMS confirmation sent to {}", apt.patient_phone),
        },
    }))
}
