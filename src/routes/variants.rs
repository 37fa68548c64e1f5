use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cache::QueryCache;
use crate::domain::auth::AdminSession;
use crate::dto::listing::ListQuery;
use crate::forms::variant::{AddVariantForm, EditVariantForm};
use crate::gateway::http::HttpGateway;
use crate::routes::{
    base_context, flash_outcome, page_error_response, redirect, render_template,
    service_error_response,
};
use crate::services::variants as variants_service;

async fn render_variants(
    session: AdminSession,
    product_id: Option<i32>,
    query: &ListQuery,
    gateway: &HttpGateway,
    cache: &QueryCache,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let gateway = gateway.authorized(&session);
    let mut context = base_context(flash_messages, &session, "variants");

    match variants_service::load_variants_page(&gateway, cache, &session, product_id, query).await
    {
        Ok(data) => {
            context.insert("variants", &data.variants);
            context.insert("product_id", &data.product_id);
            context.insert("product_title", &data.product_title);
            context.insert("products", &data.products);
            render_template(tera, "variants/index.html", &context)
        }
        Err(err) => page_error_response(err, tera, context, "load variants"),
    }
}

#[get("/variants")]
pub async fn show_variants(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_variants(session, None, &query, &gateway, &cache, &flash_messages, &tera).await
}

#[get("/products/{product_id}/variants")]
pub async fn show_product_variants(
    product_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_variants(
        session,
        Some(product_id.into_inner()),
        &query,
        &gateway,
        &cache,
        &flash_messages,
        &tera,
    )
    .await
}

#[post("/variants/add")]
pub async fn add_variant(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    MultipartForm(form): MultipartForm<AddVariantForm>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to(&format!("/products/{}/variants", form.product_id.trim()));

    match variants_service::create_variant(&gateway, &cache, &session, form).await {
        Ok(outcome) => {
            flash_outcome(outcome, "Variant added");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "add variant"),
    }
}

#[post("/variants/{variant_id}/edit")]
pub async fn edit_variant(
    variant_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    MultipartForm(form): MultipartForm<EditVariantForm>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/variants");

    match variants_service::update_variant(
        &gateway,
        &cache,
        &session,
        variant_id.into_inner(),
        form,
    )
    .await
    {
        Ok(outcome) => {
            flash_outcome(outcome, "Variant updated");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "update variant"),
    }
}
