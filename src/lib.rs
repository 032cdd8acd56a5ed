pub mod auth;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod models;
pub mod repositories;
pub mod stats;
pub mod store;
