//! OTP verification domain model.
//!
//! Each workflow id moves through NONE -> ISSUED -> VERIFIED: issuing stores
//! a code with `is_verified = false`, a successful verify flips it to true.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default number of digits in a generated code. Configurable per
/// deployment through `[otp] digits`.
pub const DEFAULT_OTP_DIGITS: u8 = 6;

/// An issued one-time code for a provisioning workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub workflow_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    pub otp: String,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sim_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Verification {
    /// Whether the submitted code matches the stored one.
    pub fn code_matches(&self, submitted: &str) -> bool {
        self.otp == submitted.trim()
    }
}

/// Generates a pseudo-random numeric code of the given digit length.
///
/// Digits are drawn independently so leading zeros are possible; the code
/// is stored and compared as a string.
pub fn generate_otp(digits: u8) -> String {
    let mut rng = rand::thread_rng();
    (0..digits.max(1))
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verification(otp: &str) -> Verification {
        Verification {
            workflow_id: "WF-1".to_string(),
            app_id: None,
            otp: otp.to_string(),
            is_verified: false,
            sim_no: None,
            latitude: None,
            longitude: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_otp_length() {
        assert_eq!(generate_otp(6).len(), 6);
        assert_eq!(generate_otp(4).len(), 4);
    }

    #[test]
    fn test_generate_otp_zero_digits_clamped() {
        assert_eq!(generate_otp(0).len(), 1);
    }

    #[test]
    fn test_generate_otp_all_numeric() {
        let otp = generate_otp(DEFAULT_OTP_DIGITS);
        assert!(otp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_code_matches() {
        let record = verification("123456");
        assert!(record.code_matches("123456"));
        assert!(record.code_matches(" 123456 "));
        assert!(!record.code_matches("654321"));
    }

    #[test]
    fn test_verification_serializes_camel_case() {
        let record = verification("004211");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["workflowId"], "WF-1");
        assert_eq!(json["otp"], "004211");
        assert_eq!(json["isVerified"], false);
    }
}
