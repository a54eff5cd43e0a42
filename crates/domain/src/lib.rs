//! Domain layer for the Terminal Transaction Service.
//!
//! This crate contains:
//! - Domain models (TerminalConfig, Sale, Deployment, Verification)
//! - The canonical terminal-pair key
//! - Business policies (void check, identifier generation)

pub mod models;
pub mod services;
