//! Business policy services.

pub mod void_policy;

pub use void_policy::{allow_void, VOID_DENY_SENTINEL};
