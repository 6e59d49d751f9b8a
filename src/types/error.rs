use thiserror::Error;

/// Fatal conditions reported at the entry point. Network failures never reach
/// this type; they are handled at their own call sites.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File {0} not found.")]
    MissingFile(String),

    #[error("Referral code is empty.")]
    EmptyReferralCode,

    #[error("No wallet addresses found in {0}")]
    NoWallets(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
