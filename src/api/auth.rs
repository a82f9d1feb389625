use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{Role, User};
use crate::service::session::{self, NewUser};
use crate::store::Store;

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "jane@company.com", format = "email")]
    pub email: String,
    pub password: String,
}

/// The public face of a user record; the stored password never leaves the
/// collection.
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@company.com")]
    pub email: String,
    #[schema(example = "employee")]
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Registration endpoint
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = NewUser,
    responses(
        (status = 201, description = "User registered successfully", body = Object, example = json!({
            "message": "User registered successfully"
        })),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Email already registered", body = Object, example = json!({
            "message": "Email already registered"
        }))
    ),
    tag = "Auth"
)]
pub async fn register(
    store: web::Data<Store>,
    payload: web::Json<NewUser>,
) -> Result<impl Responder, ServiceError> {
    let user = session::register(&store, payload.into_inner())?;
    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "user": UserResponse::from(user),
    })))
}

/// Login endpoint
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "message": "Invalid credentials"
        }))
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(store, payload), fields(email = %payload.email))]
pub async fn login(
    store: web::Data<Store>,
    payload: web::Json<LoginReq>,
) -> Result<impl Responder, ServiceError> {
    info!("Login request received");
    let user = session::login(&store, &payload.email, &payload.password)?;
    info!(user_id = %user.id, "Login successful");
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
