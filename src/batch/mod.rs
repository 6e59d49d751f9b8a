use std::time::Duration;

use tokio::time::sleep;

use crate::api::referral::ReferralApi;
use crate::api::rpc::BalanceQuery;
use crate::utils::terminal;

/// Outcome of one batch run. `processed` counts every address visited,
/// `applied` only those where the referral code was accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub applied: usize,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.processed - self.applied
    }
}

/// Delays inserted between network calls to stay friendly with the remote
/// service. `step` separates the calls within one wallet, `cooldown` runs
/// after the referral attempt and again between wallets.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub step: Duration,
    pub cooldown: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            step: Duration::from_secs(1),
            cooldown: Duration::from_secs(2),
        }
    }
}

impl Pacing {
    /// No delays at all. Meant for tests.
    pub fn none() -> Self {
        Self {
            step: Duration::ZERO,
            cooldown: Duration::ZERO,
        }
    }
}

/// Runs the full referral pipeline over every address, strictly in order.
///
/// Each step talks to the network through a fail-closed facade, so a broken
/// address only produces error lines and moves on; the batch never aborts.
pub async fn process_wallets(
    api: &impl ReferralApi,
    rpc: &impl BalanceQuery,
    addresses: &[String],
    referral_code: &str,
    pacing: &Pacing,
) -> BatchReport {
    let total = addresses.len();
    let mut report = BatchReport::default();

    for (index, address) in addresses.iter().enumerate() {
        terminal::header(&format!("Wallet {}/{}", index + 1, total));

        let (_, record) = api.fetch_one(address).await;
        if record.is_none() {
            terminal::info("No existing referral found");
        } else {
            terminal::info("Existing referral found");
        }
        sleep(pacing.step).await;

        if api.check_account(address).await {
            terminal::success("Account verified");
        } else {
            terminal::error("Account check failed");
        }
        sleep(pacing.step).await;

        match rpc.wei_balance(address).await {
            Some(wei) => terminal::info(&format!("Balance: {} wei", wei)),
            None => terminal::error("Balance unavailable"),
        }
        sleep(pacing.step).await;

        if api.referral_exists(address).await {
            terminal::info("Referral already exists");
        } else {
            terminal::info("No active referral, attempting to use referral code");
            let (applied, message) = api.apply_code(address, referral_code).await;
            if applied {
                terminal::success("Referral code applied successfully");
                report.applied += 1;
            } else {
                terminal::error(&format!("Failed to apply referral code: {}", message));
            }
        }
        sleep(pacing.cooldown).await;

        report.processed += 1;
        terminal::info("Waiting before next wallet...");
        sleep(pacing.cooldown).await;
    }

    report
}
