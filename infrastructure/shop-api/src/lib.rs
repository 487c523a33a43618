pub mod account_service;
pub mod basket_service;
pub mod client;
pub mod dto;
pub mod product_catalog;
mod response;
