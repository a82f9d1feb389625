use tracing::info;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{Role, User};
use crate::service::session::{self, NewUser};
use crate::store::Store;

/// Employee-role users only; admin accounts never show up in the roster.
pub fn list(store: &Store) -> Vec<User> {
    store
        .users
        .load()
        .into_iter()
        .filter(|u| u.role == Role::Employee)
        .collect()
}

/// Admin shortcut for registration with the role pinned to employee.
pub fn add(
    store: &Store,
    name: String,
    email: String,
    password: String,
) -> Result<User, ServiceError> {
    session::register(
        store,
        NewUser {
            name,
            email,
            password,
            role: Role::Employee,
        },
    )
}

/// Removes an employee and cascades to their attendance records. Leave
/// requests are left in place on purpose: they become orphaned rows that
/// still render through the denormalized name snapshot.
pub fn remove(store: &Store, employee_id: Uuid) -> Result<(), ServiceError> {
    let removed = store.users.update(|users| {
        let before = users.len();
        users.retain(|u| u.id != employee_id);
        Ok::<_, ServiceError>(users.len() < before)
    })?;
    if !removed {
        return Err(ServiceError::EmployeeNotFound);
    }

    store.attendance.update(|records| {
        records.retain(|r| r.employee_id != employee_id);
        Ok::<_, ServiceError>(())
    })?;
    info!(%employee_id, "employee removed with attendance cascade");
    Ok(())
}
