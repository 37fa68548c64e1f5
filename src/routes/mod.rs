//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::auth::AdminSession;
use crate::middleware::LOGIN_PATH;
use crate::mutation::MutationOutcome;
use crate::services::ServiceError;

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod main;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod variants;

/// Maps a flash level to the Bootstrap alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn alerts(flash_messages: &IncomingFlashMessages) -> Vec<(&str, &'static str)> {
    flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect()
}

/// Context shared by every page of the dashboard layout.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    session: &AdminSession,
    current_page: &str,
) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &alerts(flash_messages));
    context.insert("current_user", &session.user);
    context.insert("current_page", current_page);
    context
}

/// Flashes the result of a create/update/delete.
pub fn flash_outcome(outcome: MutationOutcome, success: &str) {
    match outcome {
        MutationOutcome::Succeeded { id } => {
            log::info!("{success} (id: {})", id.as_deref().unwrap_or("-"));
            FlashMessage::success(success).send();
        }
        MutationOutcome::Failed { message } => FlashMessage::error(message).send(),
    }
}

/// Turns a service failure into a flash message and a redirect.
///
/// An expired or rejected session goes back to the sign-in page.
pub fn service_error_response(err: ServiceError, back: &str, action: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            FlashMessage::error("Your session has expired").send();
            redirect(LOGIN_PATH)
        }
        ServiceError::NotFound => {
            FlashMessage::error("Not found").send();
            redirect(back)
        }
        ServiceError::Form(message) => {
            FlashMessage::error(message).send();
            redirect(back)
        }
        err => {
            log::error!("Failed to {action}: {err}");
            FlashMessage::error(format!("Failed to {action}")).send();
            redirect(back)
        }
    }
}

/// Renders the error page for a list or dashboard that failed to load.
///
/// Redirecting back would loop, so the failure is shown in place.
pub fn page_error_response(
    err: ServiceError,
    tera: &Tera,
    mut context: Context,
    action: &str,
) -> HttpResponse {
    let (status, message) = match err {
        ServiceError::Unauthorized => {
            FlashMessage::error("Your session has expired").send();
            return redirect(LOGIN_PATH);
        }
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        ServiceError::Form(message) => (StatusCode::BAD_REQUEST, message),
        err => {
            log::error!("Failed to {action}: {err}");
            (StatusCode::BAD_GATEWAY, format!("Failed to {action}"))
        }
    };

    context.insert("error_message", &message);
    match tera.render("error.html", &context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template 'error.html': {err}");
            HttpResponse::build(status).finish()
        }
    }
}
