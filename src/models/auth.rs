use serde::Deserialize;

use crate::domain::auth::{AdminSession, AdminUser};
use crate::domain::types::{AdminId, Email, TypeConstraintError};
use crate::models::wire::WireNumber;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: WireNumber,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /auth/admin-login` body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

impl TryFrom<LoginResponse> for AdminSession {
    type Error = TypeConstraintError;

    fn try_from(row: LoginResponse) -> Result<Self, Self::Error> {
        if row.token.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            token: row.token,
            user: AdminUser {
                id: AdminId::new(row.user.id.as_i32()?)?,
                name: row.user.name.unwrap_or_default(),
                email: Email::new(row.user.email)?,
                role: row.user.role.unwrap_or_default(),
            },
        })
    }
}
