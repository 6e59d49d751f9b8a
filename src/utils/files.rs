use std::fs;
use std::path::Path;

use crate::types::error::AppError;

/// Loads the referral code from the first line of the given file.
///
/// The code occupies the first line only; a blank first line is treated as a
/// missing code and aborts the run before any network call.
pub fn load_referral_code(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::MissingFile(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let code = content.lines().next().unwrap_or("").trim();
    if code.is_empty() {
        return Err(AppError::EmptyReferralCode);
    }
    Ok(code.to_string())
}

/// Loads wallet addresses, one per line, skipping blank lines.
///
/// Addresses are opaque strings here; no format validation is applied.
pub fn load_wallets(path: &Path) -> Result<Vec<String>, AppError> {
    if !path.exists() {
        return Err(AppError::MissingFile(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let wallets: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if wallets.is_empty() {
        return Err(AppError::NoWallets(path.display().to_string()));
    }
    Ok(wallets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_referral_code() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reff.txt");
        fs::write(&path, "GOTCHA123\n").unwrap();

        let code = load_referral_code(&path).unwrap();
        assert_eq!(code, "GOTCHA123");
    }

    #[test]
    fn test_empty_first_line_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reff.txt");
        fs::write(&path, "\nGOTCHA123\n").unwrap();

        let err = load_referral_code(&path).unwrap_err();
        assert!(matches!(err, AppError::EmptyReferralCode));
    }

    #[test]
    fn test_missing_code_file() {
        let dir = tempdir().unwrap();
        let err = load_referral_code(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, AppError::MissingFile(_)));
    }

    #[test]
    fn test_load_wallets_skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.txt");
        fs::write(&path, "0xaaa\n\n  \n0xbbb\n").unwrap();

        let wallets = load_wallets(&path).unwrap();
        assert_eq!(wallets, vec!["0xaaa".to_string(), "0xbbb".to_string()]);
    }

    #[test]
    fn test_empty_wallet_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallets.txt");
        fs::write(&path, "\n\n").unwrap();

        let err = load_wallets(&path).unwrap_err();
        assert!(matches!(err, AppError::NoWallets(_)));
    }
}
