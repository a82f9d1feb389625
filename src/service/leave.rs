use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{LeaveRequest, LeaveStatus, User};
use crate::store::Store;

/// Appends a pending leave request. Succeeds whenever the required fields
/// are non-empty; overlapping or out-of-order date ranges are accepted
/// as submitted.
pub fn submit(
    store: &Store,
    user: &User,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> Result<LeaveRequest, ServiceError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ServiceError::MissingRequiredField("reason"));
    }
    store.leave_requests.update(|requests| {
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: user.id,
            employee_name: user.name.clone(),
            start_date,
            end_date,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
            created_at: Utc::now(),
        };
        requests.push(request.clone());
        info!(employee_id = %user.id, request_id = %request.id, "leave request submitted");
        Ok(request)
    })
}

/// Moves a pending request to approved or rejected. Pending is the only
/// valid source state; anything else (including a repeat approval) fails.
pub fn set_status(
    store: &Store,
    request_id: Uuid,
    status: LeaveStatus,
) -> Result<LeaveRequest, ServiceError> {
    if status == LeaveStatus::Pending {
        return Err(ServiceError::InvalidStateTransition);
    }
    store.leave_requests.update(|requests| {
        let request = requests
            .iter_mut()
            .find(|r| r.id == request_id && r.status == LeaveStatus::Pending)
            .ok_or(ServiceError::InvalidStateTransition)?;
        request.status = status;
        info!(%request_id, %status, "leave request resolved");
        Ok(request.clone())
    })
}

pub fn list_for_employee(store: &Store, employee_id: Uuid) -> Vec<LeaveRequest> {
    store
        .leave_requests
        .load()
        .into_iter()
        .filter(|r| r.employee_id == employee_id)
        .collect()
}

pub fn list_all(store: &Store) -> Vec<LeaveRequest> {
    store.leave_requests.load()
}
