//! HTTP route handlers.

pub mod deployment;
pub mod health;
pub mod sale;
pub mod terminal_config;
pub mod verification;
pub mod void_check;
