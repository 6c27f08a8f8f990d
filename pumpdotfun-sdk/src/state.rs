use crate::{
    error::SdkError,
    program::{self, DISCRIMINATOR_LEN},
};
use borsh::BorshDeserialize;
use solana_sdk::pubkey::Pubkey;

#[derive(BorshDeserialize, PartialEq, Debug, Clone)]
pub struct GlobalAccount {
    pub initialized: bool,
    pub authority: Pubkey,
    /// Receives the protocol fee of every trade
    pub fee_recipient: Pubkey,
    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub token_total_supply: u64,
    pub fee_basis_points: u64,
}

impl GlobalAccount {
    pub fn from_account_data(account: &Pubkey, data: &[u8]) -> Result<GlobalAccount, SdkError> {
        decode(account, data)
    }
}

#[derive(BorshDeserialize, PartialEq, Debug, Clone)]
pub struct BondingCurveAccount {
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub token_total_supply: u64,
    /// Set once the curve migrated, no more trades are accepted
    pub complete: bool,
}

impl BondingCurveAccount {
    pub fn from_account_data(
        account: &Pubkey,
        data: &[u8],
    ) -> Result<BondingCurveAccount, SdkError> {
        decode(account, data)
    }

    /// Token amount received for `amount` lamports on the constant product curve,
    /// capped by the real token reserves.
    pub fn get_buy_price(&self, amount: u64) -> Result<u64, SdkError> {
        if self.complete {
            return Err(SdkError::CurveComplete);
        }
        if amount == 0 {
            return Ok(0);
        }

        let virtual_sol = self.virtual_sol_reserves as u128;
        let virtual_token = self.virtual_token_reserves as u128;

        let product = virtual_sol
            .checked_mul(virtual_token)
            .ok_or(SdkError::Overflow)?;
        let new_sol_reserves = virtual_sol
            .checked_add(amount as u128)
            .ok_or(SdkError::Overflow)?;
        let new_token_reserves = product
            .checked_div(new_sol_reserves)
            .ok_or(SdkError::Overflow)?
            + 1;
        let tokens_out = virtual_token.saturating_sub(new_token_reserves);

        Ok(tokens_out.min(self.real_token_reserves as u128) as u64)
    }

    /// Token amount for `sol_amount` lamports and the maximum SOL cost the buy
    /// may reach once `slippage_basis_points` is applied.
    pub fn quote_buy(
        &self,
        sol_amount: u64,
        slippage_basis_points: u64,
    ) -> Result<(u64, u64), SdkError> {
        let amount = self.get_buy_price(sol_amount)?;
        let max_sol_cost =
            program::calculate_with_slippage_buy(sol_amount, slippage_basis_points)
                .ok_or(SdkError::Overflow)?;
        Ok((amount, max_sol_cost))
    }
}

// Trailing bytes are ignored, the program appends fields to its accounts over time.
fn decode<T: BorshDeserialize>(account: &Pubkey, data: &[u8]) -> Result<T, SdkError> {
    let mut body = data.get(DISCRIMINATOR_LEN..).unwrap_or_default();
    T::deserialize(&mut body).map_err(|source| SdkError::Decode {
        account: *account,
        source,
    })
}
