use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::LeaveStatus;
use crate::service::{leave, session};
use crate::store::Store;

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    pub employee_id: Uuid,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "family visit")]
    pub reason: String,
}

#[derive(Deserialize, IntoParams)]
pub struct LeaveFilter {
    /// Restrict to one employee's requests
    pub employee_id: Option<Uuid>,
    /// Filter by leave status
    pub status: Option<LeaveStatus>,
}

/// Create leave request
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted", body = Object, example = json!({
            "message": "Leave request submitted",
            "status": "pending"
        })),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: web::Data<Store>,
    payload: web::Json<CreateLeave>,
) -> Result<impl Responder, ServiceError> {
    let user = session::find_user(&store, payload.employee_id)?;
    let request = leave::submit(
        &store,
        &user,
        payload.start_date,
        payload.end_date,
        &payload.reason,
    )?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave request submitted",
        "status": request.status,
        "request": request,
    })))
}

/// List leave requests, for the employee view (filtered) or admin view (all)
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Leave request list", body = [crate::model::LeaveRequest])
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    store: web::Data<Store>,
    query: web::Query<LeaveFilter>,
) -> Result<impl Responder, ServiceError> {
    let mut requests = match query.employee_id {
        Some(employee_id) => leave::list_for_employee(&store, employee_id),
        None => leave::list_all(&store),
    };
    if let Some(status) = query.status {
        requests.retain(|r| r.status == status);
    }
    Ok(HttpResponse::Ok().json(requests))
}

/// Approve leave (admin)
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/approve",
    params(
        ("leave_id" = Uuid, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved", body = Object, example = json!({
            "message": "Leave approved"
        })),
        (status = 400, description = "Leave request not found or already processed", body = Object, example = json!({
            "message": "Leave request not found or already processed"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    leave::set_status(&store, path.into_inner(), LeaveStatus::Approved)?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Leave approved" })))
}

/// Reject leave (admin)
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/reject",
    params(
        ("leave_id" = Uuid, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Leave request not found or already processed", body = Object, example = json!({
            "message": "Leave request not found or already processed"
        }))
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    leave::set_status(&store, path.into_inner(), LeaveStatus::Rejected)?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Leave rejected" })))
}
