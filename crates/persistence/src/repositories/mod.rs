//! Repository implementations for database operations.

pub mod deployment;
pub mod sale;
pub mod terminal_config;
pub mod verification;

pub use deployment::DeploymentRepository;
pub use sale::SaleRepository;
pub use terminal_config::TerminalConfigRepository;
pub use verification::VerificationRepository;
