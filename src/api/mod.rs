pub mod attendance;
pub mod auth;
pub mod employee;
pub mod leave_request;
pub mod report;
