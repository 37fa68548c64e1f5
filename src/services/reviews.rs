//! Review moderation: list and delete.

use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::auth::AdminSession;
use crate::domain::types::ReviewId;
use crate::dto::listing::{ListPage, ListQuery};
use crate::dto::reviews::ReviewsPageData;
use crate::gateway::{ReviewReader, ReviewWriter};
use crate::listing::collections::REVIEWS;
use crate::mutation::{MutationBridge, MutationOutcome};
use crate::services::{ServiceResult, cached, ensure_admin, prepare_view, run_client_view};

pub async fn load_reviews_page<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    query: &ListQuery,
) -> ServiceResult<ReviewsPageData>
where
    G: ReviewReader + ?Sized,
{
    ensure_admin(session)?;

    let reviews = cached(cache, CacheKey::all(Collection::Reviews), || {
        gateway.list_reviews()
    })
    .await?;

    let view = run_client_view(prepare_view(REVIEWS, None, query), reviews);

    Ok(ReviewsPageData {
        reviews: ListPage::from_view(view, |review| review),
    })
}

pub async fn delete_review<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    review_id: i32,
) -> ServiceResult<MutationOutcome>
where
    G: ReviewWriter + ?Sized,
{
    ensure_admin(session)?;

    let review_id = ReviewId::new(review_id)?;

    let bridge = MutationBridge::new(cache, &[Collection::Reviews], "Failed to delete review");
    Ok(bridge.submit(gateway.delete_review(review_id)).await)
}
