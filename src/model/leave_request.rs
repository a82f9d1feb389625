use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Leave lifecycle: pending is the only source state, approved and
/// rejected are terminal.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Snapshot of the employee name at submission time.
    pub employee_name: String,
    #[schema(example = "2026-01-05", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-07", value_type = String)]
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    #[schema(example = "2026-01-01T00:00:00Z", value_type = String)]
    pub created_at: DateTime<Utc>,
}
