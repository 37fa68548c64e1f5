use serde::Deserialize;

use crate::domain::review::Review as DomainReview;
use crate::domain::types::{ReviewId, TypeConstraintError};
use crate::models::wire::{WireNumber, parse_optional_timestamp};

/// Row of `GET /reviews/admin/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub id: WireNumber,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub rating: Option<WireNumber>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(row: Review) -> Result<Self, Self::Error> {
        let rating = row.rating.map(|r| r.as_count()).transpose()?.unwrap_or(0);

        Ok(Self {
            id: ReviewId::new(row.id.as_i32()?)?,
            user_name: row.user_name.unwrap_or_default(),
            product_name: row.product_name.unwrap_or_default(),
            rating: rating.min(5) as u8,
            comment: row.comment.unwrap_or_default(),
            created_at: parse_optional_timestamp(row.created_at.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReviewList {
    Bare(Vec<Review>),
    Wrapped { reviews: Vec<Review> },
}

impl ReviewList {
    pub fn into_rows(self) -> Vec<Review> {
        match self {
            ReviewList::Bare(rows) | ReviewList::Wrapped { reviews: rows } => rows,
        }
    }
}
