//! Gotcha Auto-Referral CLI
//!
//! Batch-applies a referral code to a list of wallet addresses through the
//! Gotcha referral API, checking account status and on-chain balance along the way.

pub mod api;
pub mod batch;
pub mod config;
pub mod types;
pub mod utils;
