//! Backend payload shapes and their conversion into domain types.

pub mod analytics;
pub mod auth;
pub mod category;
pub mod config;
pub mod customer;
pub mod order;
pub mod product;
pub mod review;
pub mod variant;
pub mod wire;
