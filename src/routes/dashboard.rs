use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::cache::QueryCache;
use crate::domain::auth::AdminSession;
use crate::gateway::http::HttpGateway;
use crate::routes::{base_context, page_error_response, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/")]
pub async fn show_dashboard(
    session: AdminSession,
    gateway: web::Data<HttpGateway>,
    cache: web::Data<QueryCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let gateway = gateway.authorized(&session);
    let mut context = base_context(&flash_messages, &session, "dashboard");

    match dashboard_service::load_dashboard(&gateway, &cache, &session).await {
        Ok(data) => {
            context.insert("dashboard", &data);
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(err) => page_error_response(err, &tera, context, "load dashboard"),
    }
}
