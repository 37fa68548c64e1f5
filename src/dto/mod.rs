//! DTO modules that bridge services with templates.

pub mod customers;
pub mod dashboard;
pub mod listing;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod variants;
