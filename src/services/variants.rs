//! Product variants: list (optionally scoped to one product), create, edit.

use std::collections::{BTreeMap, BTreeSet};

use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::auth::AdminSession;
use crate::domain::types::{ProductId, VariantId};
use crate::domain::variant::{NewVariant, UpdateVariant, Variant};
use crate::dto::listing::{ListPage, ListQuery};
use crate::dto::variants::{ProductOption, VariantRow, VariantsPageData};
use crate::forms::variant::{AddVariantForm, EditVariantForm};
use crate::gateway::{ProductListQuery, ProductReader, VariantReader, VariantWriter};
use crate::listing::collections::VARIANTS;
use crate::mutation::{MutationBridge, MutationOutcome};
use crate::services::{ServiceResult, cached, ensure_admin, prepare_view, run_client_view};

/// Titles of the products the backend lists without paging parameters.
///
/// The titles only label the page, so a failed read leaves them out instead
/// of failing the whole page.
async fn product_titles<G>(gateway: &G, cache: &QueryCache) -> BTreeMap<ProductId, String>
where
    G: ProductReader + ?Sized,
{
    let query = ProductListQuery::new();
    let key = CacheKey::new(Collection::Products, query.cache_params());

    match cached(cache, key, || gateway.list_products(query)).await {
        Ok(page) => page
            .products
            .into_iter()
            .map(|product| (product.id, product.title.into_inner()))
            .collect(),
        Err(err) => {
            log::warn!("Showing variants without product titles: {err}");
            BTreeMap::new()
        }
    }
}

/// Every listed product plus any product a variant points at, by id.
fn product_options(
    titles: &BTreeMap<ProductId, String>,
    variants: &[Variant],
) -> Vec<ProductOption> {
    let mut ids: BTreeSet<ProductId> = titles.keys().copied().collect();
    ids.extend(variants.iter().map(|variant| variant.product_id));

    ids.into_iter()
        .map(|id| ProductOption {
            id,
            title: titles.get(&id).cloned(),
        })
        .collect()
}

/// Loads the variants page.
///
/// With `product_id` the page is scoped to that product and its filter is
/// preselected; otherwise every variant is loaded and filtered locally.
pub async fn load_variants_page<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    product_id: Option<i32>,
    query: &ListQuery,
) -> ServiceResult<VariantsPageData>
where
    G: VariantReader + ProductReader + ?Sized,
{
    ensure_admin(session)?;

    let product_id = product_id.map(ProductId::new).transpose()?;

    let variants = match product_id {
        Some(product_id) => {
            cached(
                cache,
                CacheKey::new(Collection::Variants, format!("product={product_id}")),
                || gateway.list_product_variants(product_id),
            )
            .await?
        }
        None => {
            cached(cache, CacheKey::all(Collection::Variants), || {
                gateway.list_variants()
            })
            .await?
        }
    };

    let titles = product_titles(gateway, cache).await;
    let products = product_options(&titles, &variants);
    let product_title = product_id.and_then(|id| titles.get(&id).cloned());

    let preselected = product_id.map(|id| id.to_string());
    let view = run_client_view(prepare_view(VARIANTS, preselected, query), variants);

    Ok(VariantsPageData {
        variants: ListPage::from_view(view, |variant| VariantRow {
            product_title: titles.get(&variant.product_id).cloned(),
            variant,
        }),
        product_id,
        product_title,
        products,
    })
}

pub async fn create_variant<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    form: AddVariantForm,
) -> ServiceResult<MutationOutcome>
where
    G: VariantWriter + ?Sized,
{
    ensure_admin(session)?;

    let variant = NewVariant::try_from(form)?;

    let bridge = MutationBridge::new(cache, &[Collection::Variants], "Failed to add variant");
    Ok(bridge.submit(gateway.create_variant(&variant)).await)
}

pub async fn update_variant<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    variant_id: i32,
    form: EditVariantForm,
) -> ServiceResult<MutationOutcome>
where
    G: VariantWriter + ?Sized,
{
    ensure_admin(session)?;

    let variant_id = VariantId::new(variant_id)?;
    let updates = UpdateVariant::try_from(form)?;

    let bridge = MutationBridge::new(cache, &[Collection::Variants], "Failed to update variant");
    Ok(bridge
        .submit(gateway.update_variant(variant_id, &updates))
        .await)
}
