pub mod error;
pub mod referral;
