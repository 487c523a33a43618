pub mod entity;
pub mod file_store;
