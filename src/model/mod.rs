pub mod config;
pub mod repository;

pub use config::Config;
