pub mod config;
pub mod transcriber;
