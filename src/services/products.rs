//! Product catalog: server-paginated list, create, edit and delete.

use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::auth::AdminSession;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{CategoryId, ProductId, ProductStatus};
use crate::dto::listing::{ListPage, ListQuery};
use crate::dto::products::{ProductRow, ProductsPageData};
use crate::forms::product::{AddProductForm, EditProductForm};
use crate::gateway::{CategoryReader, ProductListQuery, ProductPage, ProductReader, ProductWriter};
use crate::listing::collections::PRODUCTS;
use crate::listing::{CollectionView, FetchParams, RecordSet};
use crate::mutation::{MutationBridge, MutationOutcome};
use crate::services::categories::list_categories;
use crate::services::{ServiceError, ServiceResult, cached, ensure_admin, prepare_view};

/// Translates the view's fetch parameters into the backend's product query.
fn product_query(params: &FetchParams) -> ServiceResult<ProductListQuery> {
    let mut query = ProductListQuery::new();
    if let Some(filter) = &params.filter_value {
        let category_id = filter
            .parse::<i32>()
            .map_err(|_| ServiceError::Form(format!("Unknown category: {filter}")))?;
        query = query.category(CategoryId::new(category_id)?);
    }
    if let (Some(page), Some(per_page)) = (params.page, params.page_size) {
        query = query.paginate(page, per_page);
    }
    Ok(query)
}

async fn fetch_page<G>(
    gateway: &G,
    cache: &QueryCache,
    view: &mut CollectionView<Product>,
) -> ServiceResult<()>
where
    G: ProductReader + ?Sized,
{
    let query = product_query(&view.fetch_params())?;
    let key = CacheKey::new(Collection::Products, query.cache_params());
    let Some(ticket) = view.begin_fetch() else {
        return Ok(());
    };

    let page: ProductPage = cached(cache, key, || gateway.list_products(query)).await?;
    view.complete_fetch(
        ticket,
        RecordSet::Page {
            items: page.products,
            total_pages: page.total_pages,
        },
    );
    Ok(())
}

/// Loads one backend page of products plus the category names.
///
/// A page past the end is clamped by the view and fetched once more.
pub async fn load_products_page<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    query: &ListQuery,
) -> ServiceResult<ProductsPageData>
where
    G: ProductReader + CategoryReader + ?Sized,
{
    ensure_admin(session)?;

    let categories = list_categories(gateway, cache).await?;

    // The backend cannot search products, so the page never shows search text.
    let query = ListQuery {
        q: None,
        ..query.clone()
    };
    let mut view = prepare_view(PRODUCTS, None, &query);
    let requested = view.state().page;

    fetch_page(gateway, cache, &mut view).await?;
    if view.state().page != requested {
        log::debug!(
            "product page {requested} is out of range, showing {}",
            view.state().page
        );
        fetch_page(gateway, cache, &mut view).await?;
    }

    let products = ListPage::from_view(view, |product| ProductRow::new(product, &categories));

    Ok(ProductsPageData {
        products,
        categories,
        statuses: ProductStatus::ALL,
    })
}

pub async fn create_product<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    form: AddProductForm,
) -> ServiceResult<MutationOutcome>
where
    G: ProductWriter + ?Sized,
{
    ensure_admin(session)?;

    let product = NewProduct::try_from(form)?;

    let bridge = MutationBridge::new(cache, &[Collection::Products], "Failed to add product");
    Ok(bridge.submit(gateway.create_product(&product)).await)
}

pub async fn update_product<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<MutationOutcome>
where
    G: ProductWriter + ?Sized,
{
    ensure_admin(session)?;

    let product_id = ProductId::new(product_id)?;
    let updates = UpdateProduct::try_from(form)?;

    let bridge = MutationBridge::new(cache, &[Collection::Products], "Failed to update product");
    Ok(bridge
        .submit(gateway.update_product(product_id, &updates))
        .await)
}

/// Deleting a product also drops its variants upstream.
pub async fn delete_product<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    product_id: i32,
) -> ServiceResult<MutationOutcome>
where
    G: ProductWriter + ?Sized,
{
    ensure_admin(session)?;

    let product_id = ProductId::new(product_id)?;

    let bridge = MutationBridge::new(
        cache,
        &[Collection::Products, Collection::Variants],
        "Failed to delete product",
    );
    Ok(bridge.submit(gateway.delete_product(product_id)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_multipart::form::text::Text;

    use crate::domain::category::Category;
    use crate::domain::types::{CategoryName, ProductTitle};
    use crate::forms::uploads::test_support::temp_file;
    use crate::gateway::errors::GatewayError;
    use crate::gateway::mock::MockGateway;
    use crate::services::test_support::admin;

    fn product(id: i32, title: &str, category: i32) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            title: ProductTitle::new(title).unwrap(),
            description: "A very long description of the product".to_string(),
            category_id: Some(CategoryId::new(category).unwrap()),
            status: ProductStatus::Active,
            image_url: None,
        }
    }

    fn with_categories(gateway: &mut MockGateway) {
        gateway.expect_list_categories().returning(|| {
            Ok(vec![Category {
                id: CategoryId::new(3).unwrap(),
                name: CategoryName::new("Shirts").unwrap(),
                description: None,
                image_url: None,
            }])
        });
    }

    #[actix_web::test]
    async fn category_change_starts_from_first_page() {
        let mut gateway = MockGateway::new();
        with_categories(&mut gateway);
        gateway
            .expect_list_products()
            .withf(|query| query.cache_params() == "page=1&limit=10&category=3")
            .times(1)
            .returning(|_| {
                Ok(ProductPage {
                    products: vec![product(1, "Linen shirt", 3)],
                    total_pages: 1,
                })
            });
        let cache = QueryCache::new(8);
        let query = ListQuery {
            filter: Some("3".to_string()),
            applied: Some("all".to_string()),
            page: Some(4),
            ..ListQuery::default()
        };

        let data = load_products_page(&gateway, &cache, &admin(), &query)
            .await
            .unwrap();

        assert_eq!(data.products.search, "");
        assert_eq!(data.products.filter.as_deref(), Some("3"));
        assert_eq!(data.products.items.len(), 1);
        let row = &data.products.items[0];
        assert_eq!(row.category_name.as_deref(), Some("Shirts"));
        assert_eq!(row.description_preview, "A very long descript...");
    }

    #[actix_web::test]
    async fn search_text_is_ignored_for_products() {
        let mut gateway = MockGateway::new();
        with_categories(&mut gateway);
        gateway
            .expect_list_products()
            .withf(|query| query.cache_params() == "page=2&limit=10&category=3")
            .times(1)
            .returning(|_| {
                Ok(ProductPage {
                    products: vec![product(11, "Linen shirt", 3)],
                    total_pages: 2,
                })
            });
        let cache = QueryCache::new(8);
        let query = ListQuery {
            q: Some("linen".to_string()),
            filter: Some("3".to_string()),
            applied: Some("3".to_string()),
            page: Some(2),
            ..ListQuery::default()
        };

        let data = load_products_page(&gateway, &cache, &admin(), &query)
            .await
            .unwrap();
        assert_eq!(data.products.search, "");
        assert_eq!(data.products.current_page, 2);
        assert!(data.products.has_previous);
        assert!(!data.products.has_next);
        assert_eq!(data.products.return_query, "?filter=3&applied=3&page=2");
    }

    #[actix_web::test]
    async fn page_past_the_end_is_refetched_once() {
        let mut gateway = MockGateway::new();
        with_categories(&mut gateway);
        let mut seq = mockall::Sequence::new();
        gateway
            .expect_list_products()
            .withf(|query| query.cache_params() == "page=9&limit=10")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(ProductPage {
                    products: Vec::new(),
                    total_pages: 3,
                })
            });
        gateway
            .expect_list_products()
            .withf(|query| query.cache_params() == "page=3&limit=10")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(ProductPage {
                    products: vec![product(21, "Wool coat", 3)],
                    total_pages: 3,
                })
            });
        let cache = QueryCache::new(8);

        let data = load_products_page(&gateway, &cache, &admin(), &ListQuery::default().page(9))
            .await
            .unwrap();

        assert_eq!(data.products.current_page, 3);
        assert_eq!(data.products.items[0].product.id.get(), 21);
    }

    #[actix_web::test]
    async fn empty_catalog_shows_one_page() {
        let mut gateway = MockGateway::new();
        with_categories(&mut gateway);
        gateway.expect_list_products().times(1).returning(|_| {
            Ok(ProductPage {
                products: Vec::new(),
                total_pages: 0,
            })
        });
        let cache = QueryCache::new(8);

        let data = load_products_page(&gateway, &cache, &admin(), &ListQuery::default())
            .await
            .unwrap();
        assert!(data.products.is_empty);
        assert_eq!(data.products.total_pages, 1);
        assert_eq!(data.products.current_page, 1);
    }

    #[actix_web::test]
    async fn non_numeric_category_is_rejected() {
        let mut gateway = MockGateway::new();
        with_categories(&mut gateway);
        gateway.expect_list_products().never();
        let cache = QueryCache::new(8);
        let query = ListQuery {
            filter: Some("shirts".to_string()),
            ..ListQuery::default()
        };

        assert!(matches!(
            load_products_page(&gateway, &cache, &admin(), &query).await,
            Err(ServiceError::Form(_))
        ));
    }

    #[actix_web::test]
    async fn update_sends_parsed_payload() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_update_product()
            .withf(|id, updates| {
                id.get() == 5
                    && updates.title.as_str() == "Linen shirt"
                    && updates.status == ProductStatus::Draft
            })
            .times(1)
            .returning(|_, _| Ok(Some(product(5, "Linen shirt", 3))));
        let cache = QueryCache::new(8);
        cache.insert(CacheKey::new(Collection::Products, "page=1&limit=10"), 1u8);

        let form = EditProductForm {
            title: Text("Linen shirt".to_string()),
            description: Text("Light and breathable".to_string()),
            category_id: Some(Text("3".to_string())),
            status: Some(Text("DRAFT".to_string())),
            imageurl: None,
            image: None,
        };
        let outcome = update_product(&gateway, &cache, &admin(), 5, form)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            MutationOutcome::Succeeded {
                id: Some("5".to_string())
            }
        );
        assert_eq!(
            cache.is_stale(&CacheKey::new(Collection::Products, "page=1&limit=10")),
            Some(true)
        );
    }

    #[actix_web::test]
    async fn create_requires_an_image() {
        let mut gateway = MockGateway::new();
        gateway.expect_create_product().never();
        let cache = QueryCache::new(8);

        let form = AddProductForm {
            title: Text("Linen shirt".to_string()),
            description: Text("Light and breathable".to_string()),
            category_id: Some(Text("3".to_string())),
            image: None,
        };
        assert!(create_product(&gateway, &cache, &admin(), form).await.is_err());
    }

    #[actix_web::test]
    async fn create_with_image_reaches_backend() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_create_product()
            .withf(|product| product.category_id.get() == 3)
            .times(1)
            .returning(|_| Ok(None));
        let cache = QueryCache::new(8);

        let form = AddProductForm {
            title: Text("Linen shirt".to_string()),
            description: Text("Light and breathable".to_string()),
            category_id: Some(Text("3".to_string())),
            image: Some(temp_file("shirt.png", "image/png", &[1, 2, 3])),
        };
        let outcome = create_product(&gateway, &cache, &admin(), form)
            .await
            .unwrap();
        assert_eq!(outcome, MutationOutcome::Succeeded { id: None });
    }

    #[actix_web::test]
    async fn delete_invalidates_products_and_variants() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_product()
            .times(1)
            .returning(|_| Ok(()));
        let cache = QueryCache::new(8);
        cache.insert(CacheKey::all(Collection::Variants), 1u8);
        cache.insert(CacheKey::all(Collection::Categories), 1u8);

        let outcome = delete_product(&gateway, &cache, &admin(), 5).await.unwrap();

        assert!(outcome.is_success());
        assert_eq!(cache.is_stale(&CacheKey::all(Collection::Variants)), Some(true));
        assert_eq!(
            cache.is_stale(&CacheKey::all(Collection::Categories)),
            Some(false)
        );
    }

    #[actix_web::test]
    async fn failed_delete_keeps_cache() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_product()
            .times(1)
            .returning(|_| Err(GatewayError::Backend(String::new())));
        let cache = QueryCache::new(8);
        cache.insert(CacheKey::all(Collection::Variants), 1u8);

        let outcome = delete_product(&gateway, &cache, &admin(), 5).await.unwrap();

        assert_eq!(
            outcome,
            MutationOutcome::Failed {
                message: "Failed to delete product".to_string()
            }
        );
        assert_eq!(cache.is_stale(&CacheKey::all(Collection::Variants)), Some(false));
    }
}
