use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::AttendanceRecord;
use crate::service::{attendance, session};
use crate::store::Store;

#[derive(Serialize, ToSchema)]
pub struct HistoryEntry {
    pub record: AttendanceRecord,
    /// `"8h 29m"`, or `"N/A"` while still checked in.
    #[schema(example = "8h 29m")]
    pub duration: String,
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/{employee_id}/check-in",
    params(
        ("employee_id" = Uuid, Path, description = "ID of the employee checking in")
    ),
    responses(
        (status = 200, description = "Checked in successfully", body = Object, example = json!({
            "message": "Checked in successfully"
        })),
        (status = 400, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        })),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    let user = session::find_user(&store, path.into_inner())?;
    let record = attendance::check_in(&store, &user)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Checked in successfully",
        "record": record,
    })))
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/attendance/{employee_id}/check-out",
    params(
        ("employee_id" = Uuid, Path, description = "ID of the employee checking out")
    ),
    responses(
        (status = 200, description = "Checked out successfully", body = Object, example = json!({
            "message": "Checked out successfully"
        })),
        (status = 400, description = "No active check-in found for today", body = Object, example = json!({
            "message": "No active check-in found for today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    let record = attendance::check_out(&store, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Checked out successfully",
        "record": record,
    })))
}

/// Today's record for the dashboard header; null when not checked in yet.
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}/today",
    params(
        ("employee_id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Today's record, or null", body = AttendanceRecord)
    ),
    tag = "Attendance"
)]
pub async fn today(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    let record = attendance::today_record(&store, path.into_inner());
    Ok(HttpResponse::Ok().json(record))
}

/// Attendance history, newest day first, with per-day duration labels.
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}/history",
    params(
        ("employee_id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance history", body = [HistoryEntry])
    ),
    tag = "Attendance"
)]
pub async fn history(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    let entries: Vec<HistoryEntry> = attendance::history(&store, path.into_inner())
        .into_iter()
        .map(|record| HistoryEntry {
            duration: attendance::duration_label(&record),
            record,
        })
        .collect();
    Ok(HttpResponse::Ok().json(entries))
}
