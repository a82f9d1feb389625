use crate::api::attendance::HistoryEntry;
use crate::api::auth::{LoginReq, UserResponse};
use crate::api::employee::CreateEmployee;
use crate::api::leave_request::CreateLeave;
use crate::api::report::AttendanceReport;
use crate::model::{AttendanceRecord, LeaveRequest, LeaveStatus, Role};
use crate::service::report::{ReportPeriod, ReportRow};
use crate::service::session::NewUser;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendly API",
        version = "1.0.0",
        description = r#"
## Attendance & Leave Management Service

This API powers a small attendance and leave-management system backed by a
local, file-based record store.

### Key Features
- **Attendance Tracking**
  - Daily check-in and check-out, today's status, per-employee history with durations
- **Leave Management**
  - Submit requests, approve/reject pending requests, employee and admin listings
- **Employee Management**
  - Register accounts, admin roster, removal with attendance cascade
- **Reporting**
  - Daily / monthly / yearly attendance report rows shaped for export

### Security
There is deliberately no token layer: login is a plaintext credential
comparison against the user collection and endpoints take the acting
employee id explicitly. Treat this as a demo-grade trust model.

### Response Format
JSON-based RESTful responses; errors arrive as `{"message": "..."}`.
"#,
    ),
    paths(
        crate::api::auth::register,
        crate::api::auth::login,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::today,
        crate::api::attendance::history,

        crate::api::leave_request::create_leave,
        crate::api::leave_request::leave_list,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::report::attendance_report
    ),
    components(
        schemas(
            NewUser,
            LoginReq,
            UserResponse,
            Role,
            AttendanceRecord,
            HistoryEntry,
            LeaveRequest,
            LeaveStatus,
            CreateLeave,
            CreateEmployee,
            ReportPeriod,
            ReportRow,
            AttendanceReport
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Leave", description = "Leave management APIs"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Report", description = "Attendance report APIs"),
    )
)]
pub struct ApiDoc;
