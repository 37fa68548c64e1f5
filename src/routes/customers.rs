use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cache::QueryCache;
use crate::domain::auth::AdminSession;
use crate::dto::listing::ListQuery;
use crate::gateway::http::HttpGateway;
use crate::routes::{
    base_context, flash_outcome, page_error_response, redirect, render_template,
    service_error_response,
};
use crate::services::customers as customers_service;

#[get("/customers")]
pub async fn show_customers(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let mut context = base_context(&flash_messages, &session, "customers");

    match customers_service::load_customers_page(&gateway, &cache, &session, &query).await {
        Ok(data) => {
            context.insert("customers", &data.customers);
            render_template(&tera, "customers/index.html", &context)
        }
        Err(err) => page_error_response(err, &tera, context, "load customers"),
    }
}

#[post("/customers/{customer_id}/delete")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/customers");

    match customers_service::delete_customer(&gateway, &cache, &session, customer_id.into_inner())
        .await
    {
        Ok(outcome) => {
            flash_outcome(outcome, "Customer deleted");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "delete customer"),
    }
}
