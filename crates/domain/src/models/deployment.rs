//! Deployment domain model for terminal provisioning.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status written for freshly registered deployments.
pub const DEFAULT_DEPLOYMENT_STATUS: &str = "DEPLOYED";

/// Prefix for generated workflow ids.
pub const WORKFLOW_ID_PREFIX: &str = "WF-";

/// Prefix for generated application numbers.
pub const APPLICATION_NUMBER_PREFIX: &str = "APP-";

/// An active deployment of the terminal application onto one physical
/// terminal. One terminal has at most one deployment; re-registration
/// updates it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sim_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    pub terminal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    pub status: String,
    pub workflow_id: String,
    pub application_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Deployment registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeploymentRequest {
    #[validate(length(min = 1, max = 64, message = "terminalId must be 1-64 characters"))]
    pub terminal_id: String,
    pub merchant_id: Option<String>,
    pub sim_no: Option<String>,
    pub pos_device_id: Option<String>,
    pub app_id: Option<String>,
    pub status: Option<String>,
}

/// Generates a workflow id from an epoch-millisecond timestamp.
///
/// Generated once per deployment, on insert; updates never regenerate it.
pub fn generate_workflow_id(epoch_millis: i64) -> String {
    format!("{}{}", WORKFLOW_ID_PREFIX, epoch_millis)
}

/// Generates a short pseudo-random application number.
pub fn generate_application_number() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1000);
    format!("{}{}", APPLICATION_NUMBER_PREFIX, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_workflow_id() {
        assert_eq!(generate_workflow_id(1700000000123), "WF-1700000000123");
    }

    #[test]
    fn test_generate_application_number_format() {
        let number = generate_application_number();
        assert!(number.starts_with(APPLICATION_NUMBER_PREFIX));
        let suffix: u32 = number[APPLICATION_NUMBER_PREFIX.len()..].parse().unwrap();
        assert!(suffix < 1000);
    }

    #[test]
    fn test_register_request_defaults() {
        let request: RegisterDeploymentRequest = serde_json::from_str(
            r#"{"terminalId": "T1", "simNo": "89910000", "appId": "app-7"}"#,
        )
        .unwrap();
        assert_eq!(request.terminal_id, "T1");
        assert_eq!(request.sim_no.as_deref(), Some("89910000"));
        assert!(request.status.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_blank_terminal() {
        let request: RegisterDeploymentRequest =
            serde_json::from_str(r#"{"terminalId": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deployment_serializes_camel_case() {
        let deployment = Deployment {
            sim_no: Some("89910000".to_string()),
            merchant_id: Some("M1".to_string()),
            terminal_id: "T1".to_string(),
            pos_device_id: None,
            app_id: Some("app-7".to_string()),
            status: DEFAULT_DEPLOYMENT_STATUS.to_string(),
            workflow_id: "WF-1".to_string(),
            application_number: "APP-7".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&deployment).unwrap();
        assert_eq!(json["terminalId"], "T1");
        assert_eq!(json["simNo"], "89910000");
        assert_eq!(json["workflowId"], "WF-1");
        assert_eq!(json["applicationNumber"], "APP-7");
        assert_eq!(json["status"], "DEPLOYED");
    }
}
