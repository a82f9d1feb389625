pub mod attendance;
pub mod leave_request;
pub mod role;
pub mod user;

pub use attendance::AttendanceRecord;
pub use leave_request::{LeaveRequest, LeaveStatus};
pub use role::Role;
pub use user::User;
