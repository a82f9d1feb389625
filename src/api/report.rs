use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ServiceError;
use crate::service::report::{self, ReportPeriod, ReportRow};
use crate::store::Store;

#[derive(Deserialize, IntoParams)]
pub struct ReportQuery {
    /// Report window relative to today: daily, monthly or yearly
    pub period: ReportPeriod,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceReport {
    #[schema(example = "Attendance Report - DAILY")]
    pub title: String,
    /// Suggested name for the rendered document download.
    #[schema(example = "attendance-report-daily.pdf")]
    pub filename: String,
    pub rows: Vec<ReportRow>,
}

/// Attendance report rows for the selected period, relative to today.
/// The caller renders these into the downloadable document.
#[utoipa::path(
    get,
    path = "/api/reports/attendance",
    params(ReportQuery),
    responses(
        (status = 200, description = "Shaped report rows", body = AttendanceReport)
    ),
    tag = "Report"
)]
pub async fn attendance_report(
    store: web::Data<Store>,
    query: web::Query<ReportQuery>,
) -> Result<impl Responder, ServiceError> {
    let period = query.period;
    let records = store.attendance.load();
    let rows = report::generate(&records, period, Local::now().date_naive());
    Ok(HttpResponse::Ok().json(AttendanceReport {
        title: report::title(period),
        filename: report::filename(period),
        rows,
    }))
}
