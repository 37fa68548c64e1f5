//! Product categories: cached list and creation.

use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::auth::AdminSession;
use crate::domain::category::{Category, NewCategory};
use crate::forms::category::AddCategoryForm;
use crate::gateway::{CategoryReader, CategoryWriter};
use crate::mutation::{MutationBridge, MutationOutcome};
use crate::services::{ServiceResult, cached, ensure_admin};

/// All categories, shared by the product table and its modals.
pub async fn list_categories<G>(gateway: &G, cache: &QueryCache) -> ServiceResult<Vec<Category>>
where
    G: CategoryReader + ?Sized,
{
    cached(cache, CacheKey::all(Collection::Categories), || {
        gateway.list_categories()
    })
    .await
}

pub async fn create_category<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    form: AddCategoryForm,
) -> ServiceResult<MutationOutcome>
where
    G: CategoryWriter + ?Sized,
{
    ensure_admin(session)?;

    let category = NewCategory::try_from(form)?;

    let bridge = MutationBridge::new(cache, &[Collection::Categories], "Failed to add category");
    Ok(bridge.submit(gateway.create_category(&category)).await)
}
