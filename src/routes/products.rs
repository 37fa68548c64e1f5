use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cache::QueryCache;
use crate::domain::auth::AdminSession;
use crate::dto::listing::ListQuery;
use crate::forms::category::AddCategoryForm;
use crate::forms::product::{AddProductForm, EditProductForm};
use crate::gateway::http::HttpGateway;
use crate::routes::{
    base_context, flash_outcome, page_error_response, redirect, render_template,
    service_error_response,
};
use crate::services::{categories as categories_service, products as products_service};

#[get("/products")]
pub async fn show_products(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let mut context = base_context(&flash_messages, &session, "products");

    match products_service::load_products_page(&gateway, &cache, &session, &query).await {
        Ok(data) => {
            context.insert("products", &data.products);
            context.insert("categories", &data.categories);
            context.insert("statuses", &data.statuses);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => page_error_response(err, &tera, context, "load products"),
    }
}

#[post("/products/add")]
pub async fn add_product(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    MultipartForm(form): MultipartForm<AddProductForm>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/products");

    match products_service::create_product(&gateway, &cache, &session, form).await {
        Ok(outcome) => {
            flash_outcome(outcome, "Product added");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "add product"),
    }
}

#[post("/products/{product_id}/edit")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    MultipartForm(form): MultipartForm<EditProductForm>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/products");

    match products_service::update_product(
        &gateway,
        &cache,
        &session,
        product_id.into_inner(),
        form,
    )
    .await
    {
        Ok(outcome) => {
            flash_outcome(outcome, "Product updated");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "update product"),
    }
}

#[post("/products/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/products");

    match products_service::delete_product(&gateway, &cache, &session, product_id.into_inner())
        .await
    {
        Ok(outcome) => {
            flash_outcome(outcome, "Product deleted");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "delete product"),
    }
}

#[post("/categories/add")]
pub async fn add_category(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    MultipartForm(form): MultipartForm<AddCategoryForm>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/products");

    match categories_service::create_category(&gateway, &cache, &session, form).await {
        Ok(outcome) => {
            flash_outcome(outcome, "Category added");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "add category"),
    }
}
