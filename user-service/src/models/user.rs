//! User record and its public representation.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A persisted user row.
///
/// Deliberately not `Serialize`: the `password` column (an Argon2 hash)
/// must never reach a response body. Convert through [`User::sanitized`]
/// before returning a user to a caller.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The wire representation of a user: everything except the password.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SanitizedUser {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl User {
    pub fn sanitized(&self) -> SanitizedUser {
        SanitizedUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
