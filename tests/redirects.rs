use actix_identity::{Identity, IdentityMiddleware};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::{
    App, HttpMessage, HttpRequest, HttpResponse,
    http::{StatusCode, header},
    test, web,
};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

use storefront_admin::cache::QueryCache;
use storefront_admin::domain::auth::{AdminSession, AdminUser};
use storefront_admin::domain::types::{AdminId, Email};
use storefront_admin::gateway::http::HttpGateway;
use storefront_admin::models::config::ServerConfig;
use storefront_admin::routes::customers::delete_customer;
use storefront_admin::routes::orders::update_order_status;
use storefront_admin::routes::products::delete_product;

fn config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*".to_string(),
        secret: "x".repeat(64),
        // Nothing listens here, so every backend call fails fast.
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        api_timeout_secs: 2,
        cache_capacity: 16,
    }
}

async fn sign_in(req: HttpRequest) -> HttpResponse {
    let session = AdminSession {
        token: "token".to_string(),
        user: AdminUser {
            id: AdminId::new(1).unwrap(),
            name: "Admin".to_string(),
            email: Email::new("admin@example.com").unwrap(),
            role: "ADMIN".to_string(),
        },
    };
    let stored = serde_json::to_string(&session).unwrap();
    Identity::login(&req.extensions(), stored).unwrap();
    HttpResponse::Ok().finish()
}

fn secret_key() -> Key {
    Key::from(config().secret.as_bytes())
}

fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), secret_key())
        .cookie_secure(false)
        .build()
}

/// The mutation routes behind the same middleware stack the server uses.
macro_rules! dashboard {
    () => {{
        let message_store = CookieMessageStore::builder(secret_key()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();
        let gateway = HttpGateway::new(&config()).unwrap();

        test::init_service(
            App::new()
                .wrap(message_framework)
                .wrap(IdentityMiddleware::default())
                .wrap(session_middleware())
                .service(delete_customer)
                .service(update_order_status)
                .service(delete_product)
                .app_data(web::Data::new(gateway))
                .app_data(web::Data::new(QueryCache::new(16))),
        )
        .await
    }};
}

/// Cookies of a signed-in admin, issued with the dashboard's session key.
async fn session_cookies() -> Vec<Cookie<'static>> {
    let app = test::init_service(
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(session_middleware())
            .route("/sign-in", web::post().to(sign_in)),
    )
    .await;

    let req = test::TestRequest::post().uri("/sign-in").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    resp.response()
        .cookies()
        .map(|cookie| cookie.into_owned())
        .collect()
}

fn signed_in(mut req: test::TestRequest, cookies: &[Cookie<'static>]) -> test::TestRequest {
    for cookie in cookies {
        req = req.cookie(cookie.clone());
    }
    req
}

#[actix_web::test]
async fn failed_delete_returns_to_the_same_search_page() {
    let app = dashboard!();
    let cookies = session_cookies().await;

    let req = signed_in(
        test::TestRequest::post().uri("/customers/3/delete?q=al&page=2"),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/customers?q=al&page=2"
    );
}

#[actix_web::test]
async fn rejected_status_update_keeps_both_order_filters() {
    let app = dashboard!();
    let cookies = session_cookies().await;

    let req = signed_in(
        test::TestRequest::post()
            .uri("/orders/5/status?q=ann&filter=SHIPPED&applied=SHIPPED&payment=PAID&page=2")
            .set_form([("status", "LOST"), ("payment_status", "PAID")]),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/orders?q=ann&filter=SHIPPED&applied=SHIPPED&payment=PAID&applied_payment=PAID&page=2"
    );
}

#[actix_web::test]
async fn product_delete_returns_to_the_category_page() {
    let app = dashboard!();
    let cookies = session_cookies().await;

    let req = signed_in(
        test::TestRequest::post().uri("/products/0/delete?filter=3&applied=all&page=4"),
        &cookies,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/products?filter=3&applied=3&page=4"
    );
}

#[actix_web::test]
async fn mutations_without_list_state_return_to_the_bare_list() {
    let app = dashboard!();
    let cookies = session_cookies().await;

    let req = signed_in(test::TestRequest::post().uri("/customers/0/delete"), &cookies)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/customers");
}
