use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::ReviewId;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub user_name: String,
    pub product_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub created_at: Option<NaiveDateTime>,
}
