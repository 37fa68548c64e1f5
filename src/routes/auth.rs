use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::domain::auth::AdminSession;
use crate::forms::login::LoginForm;
use crate::gateway::http::HttpGateway;
use crate::middleware::LOGIN_PATH;
use crate::routes::{alerts, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

#[get("/login")]
pub async fn show_login(
    session: Option<AdminSession>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if session.is_some() {
        return redirect("/");
    }

    let mut context = Context::new();
    context.insert("alerts", &alerts(&flash_messages));
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    gateway: web::Data<HttpGateway>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let session = match auth_service::login(gateway.get_ref(), form).await {
        Ok(session) => session,
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            return redirect(LOGIN_PATH);
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Login failed").send();
            return redirect(LOGIN_PATH);
        }
    };

    let stored = match serde_json::to_string(&session) {
        Ok(stored) => stored,
        Err(err) => {
            log::error!("Failed to encode session: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if let Err(err) = Identity::login(&req.extensions(), stored) {
        log::error!("Failed to store session: {err}");
        return HttpResponse::InternalServerError().finish();
    }

    FlashMessage::success(format!("Welcome, {}", session.user.name)).send();
    redirect("/")
}

#[post("/logout")]
pub async fn logout(user: Option<Identity>) -> impl Responder {
    if let Some(user) = user {
        user.logout();
    }
    redirect(LOGIN_PATH)
}
