//! Authenticated dashboard session passed explicitly into every service call.

use serde::{Deserialize, Serialize};

use crate::domain::types::{AdminId, Email};

/// Backend role required to use the dashboard.
pub const ADMIN_ROLE: &str = "ADMIN";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: AdminId,
    pub name: String,
    pub email: Email,
    pub role: String,
}

/// Bearer token plus the user it was issued to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminSession {
    pub token: String,
    pub user: AdminUser,
}

impl AdminSession {
    pub fn is_admin(&self) -> bool {
        self.user.role.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

/// Login credentials forwarded to `POST /auth/admin-login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}
