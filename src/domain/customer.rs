use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{CustomerId, Email};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub created_at: Option<NaiveDateTime>,
}
