pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod models;
pub mod query;
pub mod store;
