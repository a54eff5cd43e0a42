//! Terminal integration config domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default integration mode for terminals registered without one.
pub const DEFAULT_INTEGRATION_MODE: &str = "STANDALONE";

/// Default display name shown for standalone terminals.
pub const DEFAULT_MODE_DISPLAY_NAME: &str = "STANDALONE";

/// Default merchant-to-terminal mapping type.
pub const DEFAULT_MAPPING_TYPE: &str = "ONE_TO_ONE";

/// Integration configuration for one (merchant, terminal) pair.
///
/// Unlike Sale and Deployment lookups, config identity is the exact ordered
/// pair: a swapped lookup is a different terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    pub merchant_id: String,
    pub terminal_id: String,
    pub integration_mode: String,
    pub integrated_mode_display_name: String,
    pub integration_mapping_type: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serializes_camel_case() {
        let config = TerminalConfig {
            merchant_id: "M1".to_string(),
            terminal_id: "T1".to_string(),
            integration_mode: DEFAULT_INTEGRATION_MODE.to_string(),
            integrated_mode_display_name: DEFAULT_MODE_DISPLAY_NAME.to_string(),
            integration_mapping_type: DEFAULT_MAPPING_TYPE.to_string(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["merchantId"], "M1");
        assert_eq!(json["integrationMode"], "STANDALONE");
        assert_eq!(json["integrationMappingType"], "ONE_TO_ONE");
    }
}
