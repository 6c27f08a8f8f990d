use crate::{
    error::SdkError,
    instruction,
    program,
    provider::Provider,
    state::{BondingCurveAccount, GlobalAccount},
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::get_associated_token_address;
use tracing::{debug, info};

pub struct PumpFunSdk {
    provider: Provider,
}

impl PumpFunSdk {
    pub fn new(provider: Provider) -> Self {
        debug!(
            "pump.fun sdk using provider wallet {}",
            provider.wallet().pubkey()
        );
        Self { provider }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub async fn get_global_account(&self) -> Result<GlobalAccount, SdkError> {
        let global = program::global_pda();
        match self.get_account_data(&global).await? {
            Some(data) => GlobalAccount::from_account_data(&global, &data),
            None => Err(SdkError::GlobalAccountNotFound(global)),
        }
    }

    pub async fn get_bonding_curve_account(
        &self,
        mint: &Pubkey,
    ) -> Result<Option<BondingCurveAccount>, SdkError> {
        let bonding_curve = program::bonding_curve_pda(mint);
        match self.get_account_data(&bonding_curve).await? {
            Some(data) => Ok(Some(BondingCurveAccount::from_account_data(
                &bonding_curve,
                &data,
            )?)),
            None => Ok(None),
        }
    }

    /// Quotes `buy_amount_sol` lamports against the mint's bonding curve and
    /// returns the instructions for `buyer` to execute the buy.
    pub async fn get_buy_instructions_by_sol_amount(
        &self,
        buyer: &Pubkey,
        mint: &Pubkey,
        buy_amount_sol: u64,
        slippage_basis_points: u64,
    ) -> Result<Vec<Instruction>, SdkError> {
        let bonding_curve = self
            .get_bonding_curve_account(mint)
            .await?
            .ok_or(SdkError::BondingCurveNotFound(*mint))?;
        let global = self.get_global_account().await?;

        let associated_user = get_associated_token_address(buyer, mint);
        let create_associated_user = self.get_account_data(&associated_user).await?.is_none();

        buy_instructions_by_sol_amount(
            buyer,
            mint,
            &global,
            &bonding_curve,
            buy_amount_sol,
            slippage_basis_points,
            create_associated_user,
        )
    }

    pub async fn get_buy_instructions(
        &self,
        buyer: &Pubkey,
        mint: &Pubkey,
        fee_recipient: &Pubkey,
        amount: u64,
        sol_amount: u64,
    ) -> Result<Vec<Instruction>, SdkError> {
        let associated_user = get_associated_token_address(buyer, mint);
        let create_associated_user = self.get_account_data(&associated_user).await?.is_none();

        Ok(buy_instructions(
            buyer,
            mint,
            fee_recipient,
            amount,
            sol_amount,
            create_associated_user,
        ))
    }

    async fn get_account_data(&self, account: &Pubkey) -> Result<Option<Vec<u8>>, SdkError> {
        let response = self
            .provider
            .connection()
            .get_account_with_commitment(account, self.provider.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }
}

/// Quotes the buy on `bonding_curve` and builds its instructions, paying the
/// protocol fee to the recipient named by `global`.
pub fn buy_instructions_by_sol_amount(
    buyer: &Pubkey,
    mint: &Pubkey,
    global: &GlobalAccount,
    bonding_curve: &BondingCurveAccount,
    buy_amount_sol: u64,
    slippage_basis_points: u64,
    create_associated_user: bool,
) -> Result<Vec<Instruction>, SdkError> {
    let (buy_amount, max_sol_cost) =
        bonding_curve.quote_buy(buy_amount_sol, slippage_basis_points)?;
    info!(
        "mint={} buy_amount_sol={} token_amount={} max_sol_cost={}",
        mint, buy_amount_sol, buy_amount, max_sol_cost
    );

    Ok(buy_instructions(
        buyer,
        mint,
        &global.fee_recipient,
        buy_amount,
        max_sol_cost,
        create_associated_user,
    ))
}

/// Buy instructions, prefixed with the creation of the buyer's token account
/// when it does not exist yet.
pub fn buy_instructions(
    buyer: &Pubkey,
    mint: &Pubkey,
    fee_recipient: &Pubkey,
    amount: u64,
    sol_amount: u64,
    create_associated_user: bool,
) -> Vec<Instruction> {
    let associated_user = get_associated_token_address(buyer, mint);
    let buy = instruction::get_buy(
        &instruction::InstructionBuy::new(amount, sol_amount),
        fee_recipient,
        mint,
        associated_user,
        buyer,
    );

    if create_associated_user {
        vec![instruction::get_create_associated_user(buyer, mint), buy]
    } else {
        vec![buy]
    }
}
