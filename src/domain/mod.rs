//! Domain aggregates exposed by the dashboard service layer.

pub mod analytics;
pub mod auth;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;
pub mod review;
pub mod types;
pub mod upload;
pub mod variant;
