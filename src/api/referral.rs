use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::api::http::{self, ApiFailure};
use crate::types::referral::{AccountCheck, ReferralCheck, ReferralLookup, ReferralUsage};
use crate::utils::terminal;

/// The referral-service operations the batch loop depends on.
///
/// Every operation fails closed: a wrapper failure is logged at the call site
/// and surfaces as the negative/default value, never as an error.
#[async_trait]
pub trait ReferralApi {
    /// Looks up the referral record for an address. Returns the server's
    /// success flag and the record payload, if any.
    async fn fetch_one(&self, address: &str) -> (bool, Option<Value>);

    /// Checks whether the address is a known, valid account.
    async fn check_account(&self, address: &str) -> bool;

    /// Checks whether the address already has an active referral.
    async fn referral_exists(&self, address: &str) -> bool;

    /// Redeems the referral code for an address. Returns the server's success
    /// flag and message.
    async fn apply_code(&self, address: &str, code: &str) -> (bool, String);
}

pub struct ReferralClient {
    client: Client,
    base_url: String,
}

impl ReferralClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Probes the service with the referral listing endpoint; only the status
    /// matters. Used once at startup, never during the batch.
    pub async fn service_reachable(&self) -> bool {
        let url = format!("{}/referral/getAll", self.base_url);
        http::get_json(&self.client, &url).await.is_ok()
    }

    fn report(context: &str, failure: &ApiFailure) {
        match failure {
            ApiFailure::Decode { body } => {
                terminal::error(&format!("Error decoding JSON response in {}", context));
                terminal::error(&format!("Response content: {}", body));
            }
            other => terminal::error(&format!("{} in {}", other, context)),
        }
    }
}

#[async_trait]
impl ReferralApi for ReferralClient {
    async fn fetch_one(&self, address: &str) -> (bool, Option<Value>) {
        let url = format!("{}/referral/getOne?address={}", self.base_url, address);
        match http::get_json(&self.client, &url).await {
            Ok(value) => {
                let lookup: ReferralLookup = serde_json::from_value(value).unwrap_or_default();
                // A JSON null record counts as "no referral".
                let data = lookup.data.filter(|v| !v.is_null());
                (lookup.success, data)
            }
            Err(failure) => {
                Self::report("fetch_one", &failure);
                (false, None)
            }
        }
    }

    async fn check_account(&self, address: &str) -> bool {
        let url = format!("{}/account/check", self.base_url);
        match http::post_json(&self.client, &url, &json!({ "address": address })).await {
            Ok(value) => {
                let check: AccountCheck = serde_json::from_value(value).unwrap_or_default();
                check.success
            }
            Err(failure) => {
                Self::report("check_account", &failure);
                false
            }
        }
    }

    async fn referral_exists(&self, address: &str) -> bool {
        let url = format!("{}/referral/check", self.base_url);
        match http::post_json(&self.client, &url, &json!({ "address": address })).await {
            Ok(value) => {
                let check: ReferralCheck = serde_json::from_value(value).unwrap_or_default();
                check.exist
            }
            Err(failure) => {
                Self::report("referral_exists", &failure);
                false
            }
        }
    }

    async fn apply_code(&self, address: &str, code: &str) -> (bool, String) {
        let url = format!("{}/referral/usageReferralAddress", self.base_url);
        let body = json!({ "address": address, "referencedCode": code });
        match http::post_json(&self.client, &url, &body).await {
            Ok(value) => {
                let usage: ReferralUsage = serde_json::from_value(value).unwrap_or_default();
                (usage.success, usage.message)
            }
            Err(failure) => {
                Self::report("apply_code", &failure);
                let message = match failure {
                    ApiFailure::ServiceDown => "Internal Server Error".to_string(),
                    ApiFailure::Status { body, .. } => body,
                    ApiFailure::Decode { .. } => "JSON decoding error".to_string(),
                    ApiFailure::Transport(message) => message,
                };
                (false, message)
            }
        }
    }
}
