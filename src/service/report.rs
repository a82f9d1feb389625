use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use crate::model::AttendanceRecord;
use crate::service::attendance;

const NOT_CHECKED_OUT: &str = "Not checked out";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Monthly,
    Yearly,
}

/// One line of the attendance export, shaped for the
/// `[Employee, Date, Check In, Check Out]` table. Rendering the actual
/// document is the exporting collaborator's job; the contract ends here.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportRow {
    #[schema(example = "Jane Doe")]
    pub employee: String,
    #[schema(example = "2024-03-15")]
    pub date: String,
    #[schema(example = "09:02:11")]
    pub check_in: String,
    #[schema(example = "17:31:40")]
    pub check_out: String,
    #[schema(example = "8h 29m")]
    pub duration: String,
}

/// Filters attendance records into the report window around
/// `reference_date` and shapes them into rows, preserving input order.
pub fn generate(
    records: &[AttendanceRecord],
    period: ReportPeriod,
    reference_date: NaiveDate,
) -> Vec<ReportRow> {
    records
        .iter()
        .filter(|r| in_period(r.date, period, reference_date))
        .map(|r| ReportRow {
            employee: r.employee_name.clone(),
            date: r.date.to_string(),
            check_in: r.check_in.to_string(),
            check_out: r
                .check_out
                .map(|t| t.to_string())
                .unwrap_or_else(|| NOT_CHECKED_OUT.to_string()),
            duration: attendance::duration_label(r),
        })
        .collect()
}

fn in_period(date: NaiveDate, period: ReportPeriod, reference: NaiveDate) -> bool {
    match period {
        ReportPeriod::Daily => date == reference,
        ReportPeriod::Monthly => date.year() == reference.year() && date.month() == reference.month(),
        ReportPeriod::Yearly => date.year() == reference.year(),
    }
}

/// Title line of the export document, e.g. `Attendance Report - DAILY`.
pub fn title(period: ReportPeriod) -> String {
    format!("Attendance Report - {}", period.to_string().to_uppercase())
}

/// Suggested name for the downloaded document.
pub fn filename(period: ReportPeriod) -> String {
    format!("attendance-report-{period}.pdf")
}
