use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::cache::QueryCache;
use crate::gateway::http::HttpGateway;
use crate::middleware::redirect_unauthorized;
use crate::models::config::ServerConfig;
use crate::routes::auth::{login, logout, show_login};
use crate::routes::customers::{delete_customer, show_customers};
use crate::routes::dashboard::show_dashboard;
use crate::routes::main::not_found;
use crate::routes::orders::{show_orders, update_order_status};
use crate::routes::products::{
    add_category, add_product, delete_product, edit_product, show_products,
};
use crate::routes::reviews::{delete_review, show_reviews};
use crate::routes::variants::{add_variant, edit_variant, show_product_variants, show_variants};

pub mod cache;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod gateway;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod mutation;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    server_config
        .validate()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    let gateway = HttpGateway::new(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;

    // One cache shared by all workers so invalidations reach every reader.
    let cache = web::Data::new(QueryCache::new(server_config.cache_capacity));

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving dashboard on {}:{} against {}",
        bind_address.0,
        bind_address.1,
        server_config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(server_config.domain.clone()))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(login)
            .service(logout)
            .service(
                web::scope("")
                    .wrap(actix_middleware::from_fn(redirect_unauthorized))
                    .service(show_dashboard)
                    .service(show_products)
                    .service(add_product)
                    .service(edit_product)
                    .service(delete_product)
                    .service(add_category)
                    .service(show_variants)
                    .service(show_product_variants)
                    .service(add_variant)
                    .service(edit_variant)
                    .service(show_orders)
                    .service(update_order_status)
                    .service(show_customers)
                    .service(delete_customer)
                    .service(show_reviews)
                    .service(delete_review),
            )
            .default_service(web::to(not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(gateway.clone()))
            .app_data(cache.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
