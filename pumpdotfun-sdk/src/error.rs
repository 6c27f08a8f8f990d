use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("Solana client error: {0}")]
    Rpc(#[from] ClientError),

    #[error("Global account not found: {0}")]
    GlobalAccountNotFound(Pubkey),

    #[error("Bonding curve account not found: {0}")]
    BondingCurveNotFound(Pubkey),

    #[error("Curve is complete")]
    CurveComplete,

    #[error("Could not decode account {account}: {source}")]
    Decode {
        account: Pubkey,
        source: std::io::Error,
    },

    #[error("Arithmetic overflow")]
    Overflow,
}
