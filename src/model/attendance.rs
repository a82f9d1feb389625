use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One attendance record per employee per day, by convention. The
/// convention is enforced at check-in, not by the store.
///
/// `employee_name` is a snapshot taken at check-in so the record still
/// renders after the employee is removed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    #[schema(example = "2026-01-05", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "09:02:11", value_type = String)]
    pub check_in: NaiveTime,
    #[schema(example = "17:31:40", value_type = Option<String>)]
    pub check_out: Option<NaiveTime>,
}
