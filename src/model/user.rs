use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::role::Role;

/// Stored account record. The password is kept verbatim in the collection
/// and compared verbatim at login; never serialize this type into an API
/// response, use a response DTO instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
