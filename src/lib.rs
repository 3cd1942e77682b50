pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod utils;
