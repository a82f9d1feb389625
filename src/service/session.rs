use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{Role, User};
use crate::store::Store;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@company.com", format = "email")]
    pub email: String,
    pub password: String,
    #[schema(example = "employee")]
    pub role: Role,
}

/// Registers a new account. Emails are the login key and must be unique;
/// the comparison is exact, as is the stored password. Password hashing is
/// a known, deliberate gap in this system, do not add it here without a
/// matching product decision.
pub fn register(store: &Store, new: NewUser) -> Result<User, ServiceError> {
    let name = new.name.trim().to_string();
    let email = new.email.trim().to_string();
    if name.is_empty() {
        return Err(ServiceError::MissingRequiredField("name"));
    }
    if email.is_empty() {
        return Err(ServiceError::MissingRequiredField("email"));
    }
    if new.password.is_empty() {
        return Err(ServiceError::MissingRequiredField("password"));
    }

    store.users.update(move |users| {
        if users.iter().any(|u| u.email == email) {
            return Err(ServiceError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
            password: new.password,
            role: new.role,
        };
        users.push(user.clone());
        info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(user)
    })
}

/// Validates credentials against the user collection and returns the
/// acting user. Exact email and password match, nothing else.
pub fn login(store: &Store, email: &str, password: &str) -> Result<User, ServiceError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ServiceError::MissingRequiredField("email or password"));
    }
    store
        .users
        .load()
        .into_iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(ServiceError::InvalidCredentials)
}

/// Looks up the current actor for handlers that receive an employee id.
pub fn find_user(store: &Store, id: Uuid) -> Result<User, ServiceError> {
    store
        .users
        .load()
        .into_iter()
        .find(|u| u.id == id)
        .ok_or(ServiceError::EmployeeNotFound)
}
