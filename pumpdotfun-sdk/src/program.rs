use solana_sdk::pubkey::Pubkey;

pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");

pub const GLOBAL_SEED: &[u8] = b"global";
pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";
pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";

/// Anchor account discriminator length, skipped before decoding account data
pub const DISCRIMINATOR_LEN: usize = 8;

pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

pub mod instruction {
    pub const BUY: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];
}

pub fn global_pda() -> Pubkey {
    Pubkey::find_program_address(&[GLOBAL_SEED], &PROGRAM_ID).0
}

pub fn bonding_curve_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[BONDING_CURVE_SEED, mint.as_ref()], &PROGRAM_ID).0
}

pub fn event_authority_pda() -> Pubkey {
    Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], &PROGRAM_ID).0
}

/// Token account of the bonding curve PDA that holds the unsold supply
pub fn associated_bonding_curve(mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(&bonding_curve_pda(mint), mint)
}

/// Max SOL the buyer accepts to pay: `amount + amount * bps / 10000`
pub fn calculate_with_slippage_buy(amount: u64, slippage_basis_points: u64) -> Option<u64> {
    let slippage = (amount as u128)
        .checked_mul(slippage_basis_points as u128)?
        .checked_div(BASIS_POINTS_DENOMINATOR as u128)?;
    u64::try_from((amount as u128).checked_add(slippage)?).ok()
}
