use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

/// Identity the provider presents to the SDK. Signing is not part of the
/// capability: transactions leave the server unsigned.
pub trait Wallet: Send + Sync {
    fn pubkey(&self) -> Pubkey;
}

/// Throwaway identity backed by a freshly generated, unfunded keypair.
pub struct EphemeralWallet {
    keypair: Keypair,
}

impl EphemeralWallet {
    pub fn generate() -> EphemeralWallet {
        EphemeralWallet {
            keypair: Keypair::new(),
        }
    }
}

impl Wallet for EphemeralWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

pub struct Provider {
    connection: RpcClient,
    wallet: Box<dyn Wallet>,
    commitment: CommitmentConfig,
}

impl Provider {
    pub fn new(connection: RpcClient, wallet: Box<dyn Wallet>, commitment: CommitmentConfig) -> Self {
        Self {
            connection,
            wallet,
            commitment,
        }
    }

    pub fn connection(&self) -> &RpcClient {
        &self.connection
    }

    pub fn wallet(&self) -> &dyn Wallet {
        self.wallet.as_ref()
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_wallets_are_unique() {
        assert_ne!(
            EphemeralWallet::generate().pubkey(),
            EphemeralWallet::generate().pubkey()
        );
    }

    #[test]
    fn provider_exposes_wallet_and_commitment() {
        let wallet = EphemeralWallet::generate();
        let pubkey = wallet.pubkey();
        let provider = Provider::new(
            RpcClient::new("http://127.0.0.1:8899".to_owned()),
            Box::new(wallet),
            CommitmentConfig::finalized(),
        );

        assert_eq!(provider.wallet().pubkey(), pubkey);
        assert_eq!(provider.commitment(), CommitmentConfig::finalized());
        assert_eq!(provider.connection().url(), "http://127.0.0.1:8899");
    }
}
