use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::batch::Pacing;

const DEFAULT_REFERRAL_API_BASE: &str = "https://gotch.blast0x.xyz/api";
const DEFAULT_RPC_URL: &str = "https://api.testnet.abs.xyz/";
const DEFAULT_CODE_FILE: &str = "reff.txt";
const DEFAULT_WALLET_FILE: &str = "eth_wallets.txt";

/// Runtime settings. Everything has a working default; each field can be
/// overridden through the environment (a `.env` file is honored via dotenv).
#[derive(Debug, Clone)]
pub struct Settings {
    pub referral_api_base: String,
    pub rpc_url: String,
    pub code_file: PathBuf,
    pub wallet_file: PathBuf,
    pub pacing: Pacing,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            referral_api_base: DEFAULT_REFERRAL_API_BASE.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            code_file: PathBuf::from(DEFAULT_CODE_FILE),
            wallet_file: PathBuf::from(DEFAULT_WALLET_FILE),
            pacing: Pacing::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            referral_api_base: var_or("AUTOREFF_API_BASE", defaults.referral_api_base),
            rpc_url: var_or("AUTOREFF_RPC_URL", defaults.rpc_url),
            code_file: PathBuf::from(var_or(
                "AUTOREFF_CODE_FILE",
                defaults.code_file.display().to_string(),
            )),
            wallet_file: PathBuf::from(var_or(
                "AUTOREFF_WALLET_FILE",
                defaults.wallet_file.display().to_string(),
            )),
            pacing: Pacing {
                step: secs_or("AUTOREFF_STEP_DELAY_SECS", defaults.pacing.step),
                cooldown: secs_or("AUTOREFF_COOLDOWN_SECS", defaults.pacing.cooldown),
            },
        }
    }
}

fn var_or(name: &str, default: String) -> String {
    env::var(name).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn secs_or(name: &str, default: Duration) -> Duration {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.referral_api_base, DEFAULT_REFERRAL_API_BASE);
        assert_eq!(settings.code_file, PathBuf::from("reff.txt"));
        assert_eq!(settings.pacing.step, Duration::from_secs(1));
        assert_eq!(settings.pacing.cooldown, Duration::from_secs(2));
    }
}
