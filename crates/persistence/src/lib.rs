//! Persistence layer for the Terminal Transaction Service.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations (matching and upsert rules)

pub mod db;
pub mod entities;
pub mod repositories;
