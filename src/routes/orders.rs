use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cache::QueryCache;
use crate::domain::auth::AdminSession;
use crate::dto::listing::ListQuery;
use crate::forms::order::UpdateOrderStatusForm;
use crate::gateway::http::HttpGateway;
use crate::routes::{
    base_context, flash_outcome, page_error_response, redirect, render_template,
    service_error_response,
};
use crate::services::orders as orders_service;

#[get("/orders")]
pub async fn show_orders(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let mut context = base_context(&flash_messages, &session, "orders");

    match orders_service::load_orders_page(&gateway, &cache, &session, &query).await {
        Ok(data) => {
            context.insert("orders", &data.orders);
            context.insert("statuses", &data.statuses);
            context.insert("payment_statuses", &data.payment_statuses);
            render_template(&tera, "orders/index.html", &context)
        }
        Err(err) => page_error_response(err, &tera, context, "load orders"),
    }
}

#[post("/orders/{order_id}/status")]
pub async fn update_order_status(
    order_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    web::Form(form): web::Form<UpdateOrderStatusForm>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/orders");

    match orders_service::update_order_status(
        &gateway,
        &cache,
        &session,
        order_id.into_inner(),
        form,
    )
    .await
    {
        Ok(outcome) => {
            flash_outcome(outcome, "Order status updated");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "update order status"),
    }
}
