use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use dotenv::dotenv;

mod api;
mod batch;
mod config;
mod types;
mod utils;

use api::referral::ReferralClient;
use api::rpc::RpcClient;
use config::Settings;
use utils::{files, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file if it exists
    dotenv().ok();

    terminal::header("Gotcha NFT Auto Reff");
    terminal::show_version();

    let settings = Settings::from_env();
    if let Err(e) = run(&settings).await {
        terminal::error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(settings: &Settings) -> Result<()> {
    // Both input files are loaded and validated before any network traffic.
    let referral_code = files::load_referral_code(&settings.code_file)?;
    terminal::info(&format!("Loaded referral code: {}", referral_code));

    let wallets = files::load_wallets(&settings.wallet_file)?;
    terminal::info(&format!("Found {} wallet addresses", wallets.len()));

    let referral = ReferralClient::new(settings.referral_api_base.clone());
    let rpc = RpcClient::new(settings.rpc_url.clone());

    if referral.service_reachable().await {
        terminal::success("Referral service is reachable");
    } else {
        terminal::error("Referral service did not respond; proceeding anyway");
    }

    terminal::info(&format!(
        "Run started at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    let report = batch::process_wallets(
        &referral,
        &rpc,
        &wallets,
        &referral_code,
        &settings.pacing,
    )
    .await;

    terminal::header("Processing complete! Summary");
    println!("{}", format!("Total wallets processed: {}", report.processed).yellow());
    println!("{}", format!("Successful referrals: {}", report.applied).green());
    println!("{}", format!("Failed referrals: {}", report.failed()).red());

    Ok(())
}
