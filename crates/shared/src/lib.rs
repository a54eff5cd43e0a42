//! Shared utilities and common types for the Terminal Transaction Service.
//!
//! This crate provides common functionality used across all other crates:
//! - Epoch-millisecond clock helpers
//! - Lenient numeric deserialization for wire payloads
//! - Common validation logic

pub mod clock;
pub mod num;
pub mod validation;
