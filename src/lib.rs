pub mod config;
pub mod dependencies;
pub mod domain;
pub mod services;
