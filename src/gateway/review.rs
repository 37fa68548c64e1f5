use async_trait::async_trait;

use crate::domain::review::Review;
use crate::domain::types::ReviewId;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::HttpGateway;
use crate::gateway::{ReviewReader, ReviewWriter};
use crate::models::review::ReviewList;

#[async_trait]
impl ReviewReader for HttpGateway {
    async fn list_reviews(&self) -> GatewayResult<Vec<Review>> {
        let list: ReviewList = self.get("reviews/admin/all").await?;
        list.into_rows()
            .into_iter()
            .map(|row| {
                Review::try_from(row)
                    .map_err(|e| GatewayError::InvalidResponse(format!("review: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl ReviewWriter for HttpGateway {
    async fn delete_review(&self, review_id: ReviewId) -> GatewayResult<()> {
        self.delete(&format!("reviews/admin/delete/{review_id}")).await
    }
}
