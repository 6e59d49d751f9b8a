use serde::Deserialize;
use serde_json::Value;

// The referral API is loose about which fields it returns; every field here
// defaults rather than failing deserialization.

#[derive(Debug, Default, Deserialize)]
pub struct ReferralLookup {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountCheck {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReferralCheck {
    #[serde(default)]
    pub exist: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReferralUsage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_default() {
        let lookup: ReferralLookup = serde_json::from_str("{}").unwrap();
        assert!(!lookup.success);
        assert!(lookup.data.is_none());

        let account: AccountCheck = serde_json::from_str("{}").unwrap();
        assert!(!account.success);

        let check: ReferralCheck = serde_json::from_str("{}").unwrap();
        assert!(!check.exist);

        let usage: ReferralUsage = serde_json::from_str("{}").unwrap();
        assert!(!usage.success);
        assert!(usage.message.is_empty());
    }

    #[test]
    fn test_populated_fields_parse() {
        let usage: ReferralUsage =
            serde_json::from_str(r#"{"success": true, "message": "Referral registered"}"#).unwrap();
        assert!(usage.success);
        assert_eq!(usage.message, "Referral registered");

        let check: ReferralCheck = serde_json::from_str(r#"{"exist": true}"#).unwrap();
        assert!(check.exist);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let lookup: ReferralLookup =
            serde_json::from_str(r#"{"success": true, "data": {"code": "ABC"}, "ts": 1}"#).unwrap();
        assert!(lookup.success);
        assert!(lookup.data.is_some());
    }
}
