//! Domain models for the Terminal Transaction Service.

pub mod deployment;
pub mod sale;
pub mod terminal_config;
pub mod terminal_pair;
pub mod verification;

pub use deployment::{
    generate_application_number, generate_workflow_id, Deployment, RegisterDeploymentRequest,
    DEFAULT_DEPLOYMENT_STATUS,
};
pub use sale::{
    generate_transaction_id, NewSale, RegisterSaleRequest, Sale, SaleResponse, SaleStatus,
    TRANSACTION_ID_PREFIX,
};
pub use terminal_config::{
    TerminalConfig, DEFAULT_INTEGRATION_MODE, DEFAULT_MAPPING_TYPE, DEFAULT_MODE_DISPLAY_NAME,
};
pub use terminal_pair::TerminalPair;
pub use verification::{generate_otp, Verification, DEFAULT_OTP_DIGITS};
