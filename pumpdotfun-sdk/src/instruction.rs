use crate::program;
use borsh::BorshSerialize;
use solana_program::{system_program, sysvar::rent};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

#[derive(BorshSerialize, Debug)]
pub struct InstructionBuy {
    pub instruction_type: [u8; 8],
    /// Token amount to receive
    pub amount: u64,
    /// Lamports the buyer accepts to pay, slippage included
    pub max_sol_cost: u64,
}

impl InstructionBuy {
    pub fn new(amount: u64, max_sol_cost: u64) -> InstructionBuy {
        InstructionBuy {
            instruction_type: program::instruction::BUY,
            amount,
            max_sol_cost,
        }
    }
}

pub fn get_buy(
    instruction_data: &InstructionBuy,
    fee_recipient: &Pubkey,
    mint: &Pubkey,
    associated_user: Pubkey,
    user: &Pubkey,
) -> Instruction {
    Instruction::new_with_borsh(
        program::PROGRAM_ID,
        instruction_data,
        vec![
            // 0. `[]` Global account
            AccountMeta::new_readonly(program::global_pda(), false),
            // 1. `[writable]` Fee recipient
            // from the global account
            AccountMeta::new(*fee_recipient, false),
            // 2. `[]` Token mint
            AccountMeta::new_readonly(*mint, false),
            // 3. `[writable]` Bonding curve
            AccountMeta::new(program::bonding_curve_pda(mint), false),
            // 4. `[writable]` Bonding curve token account
            AccountMeta::new(program::associated_bonding_curve(mint), false),
            // 5. `[writable]` User token account
            AccountMeta::new(associated_user, false),
            // 6. `[writable, signer]` User
            AccountMeta::new(*user, true),
            // 7. `[]` System program
            AccountMeta::new_readonly(system_program::id(), false),
            // 8. `[]` SPL token program
            AccountMeta::new_readonly(spl_token::id(), false),
            // 9. `[]` Rent sysvar
            AccountMeta::new_readonly(rent::id(), false),
            // 10. `[]` Event authority
            AccountMeta::new_readonly(program::event_authority_pda(), false),
            // 11. `[]` pump.fun program
            AccountMeta::new_readonly(program::PROGRAM_ID, false),
        ],
    )
}

/// Creates the buyer's token account, paid by the buyer
pub fn get_create_associated_user(user: &Pubkey, mint: &Pubkey) -> Instruction {
    spl_associated_token_account::instruction::create_associated_token_account(
        user,
        user,
        mint,
        &spl_token::id(),
    )
}
