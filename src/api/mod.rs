pub mod http;
pub mod referral;
pub mod rpc;
