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
use crate::services::reviews as reviews_service;

#[get("/reviews")]
pub async fn show_reviews(
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let mut context = base_context(&flash_messages, &session, "reviews");

    match reviews_service::load_reviews_page(&gateway, &cache, &session, &query).await {
        Ok(data) => {
            context.insert("reviews", &data.reviews);
            render_template(&tera, "reviews/index.html", &context)
        }
        Err(err) => page_error_response(err, &tera, context, "load reviews"),
    }
}

#[post("/reviews/{review_id}/delete")]
pub async fn delete_review(
    review_id: web::Path<i32>,
    session: AdminSession,
    query: web::Query<ListQuery>,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let back = query.return_to("/reviews");

    match reviews_service::delete_review(&gateway, &cache, &session, review_id.into_inner()).await
    {
        Ok(outcome) => {
            flash_outcome(outcome, "Review deleted");
            redirect(&back)
        }
        Err(err) => service_error_response(err, &back, "delete review"),
    }
}
