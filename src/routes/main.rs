use actix_web::{HttpResponse, Responder, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::domain::auth::AdminSession;
use crate::routes::{alerts, base_context};

/// Default service for unknown routes.
pub async fn not_found(
    session: Option<AdminSession>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = match &session {
        Some(session) => base_context(&flash_messages, session, "not_found"),
        None => {
            let mut context = Context::new();
            context.insert("alerts", &alerts(&flash_messages));
            context
        }
    };

    match tera.render("main/not_found.html", &context) {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template 'main/not_found.html': {err}");
            HttpResponse::NotFound().finish()
        }
    }
}
