use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::auth::UserResponse;
use crate::error::ServiceError;
use crate::service::employee;
use crate::store::Store;

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@company.com", format = "email")]
    pub email: String,
    pub password: String,
}

/// List employees (admin roster; admin accounts excluded)
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employee list", body = [UserResponse])
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> Result<impl Responder, ServiceError> {
    let roster: Vec<UserResponse> = employee::list(&store)
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(roster))
}

/// Add employee (admin)
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee added successfully", body = Object, example = json!({
            "message": "Employee added successfully"
        })),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, ServiceError> {
    let payload = payload.into_inner();
    let user = employee::add(&store, payload.name, payload.email, payload.password)?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added successfully",
        "employee": UserResponse::from(user),
    })))
}

/// Remove employee (admin); their attendance records go with them
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, ServiceError> {
    employee::remove(&store, path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Successfully deleted" })))
}
