use crate::error::ActionError;
use base64::{engine::general_purpose, Engine as _};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    compute_budget::ComputeBudgetInstruction,
    hash::Hash,
    instruction::Instruction,
    message::{v0, CompileError, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};

/// Unsigned transaction paid by `payer`, anchored to the latest finalized blockhash.
pub async fn prepare_transaction(
    rpc_client: &RpcClient,
    instructions: Vec<Instruction>,
    payer: &Pubkey,
    compute_unit_price: Option<u64>,
) -> Result<VersionedTransaction, ActionError> {
    let (blockhash, _) = rpc_client
        .get_latest_blockhash_with_commitment(CommitmentConfig::finalized())
        .await?;

    Ok(assemble_transaction(
        instructions,
        payer,
        blockhash,
        compute_unit_price,
    )?)
}

pub fn assemble_transaction(
    mut instructions: Vec<Instruction>,
    payer: &Pubkey,
    blockhash: Hash,
    compute_unit_price: Option<u64>,
) -> Result<VersionedTransaction, CompileError> {
    if let Some(price) = compute_unit_price.filter(|price| *price > 0) {
        instructions.insert(0, ComputeBudgetInstruction::set_compute_unit_price(price));
    }

    let message = v0::Message::try_compile(payer, &instructions, &[], blockhash)?;
    let signatures = vec![Signature::default(); message.header.num_required_signatures as usize];

    Ok(VersionedTransaction {
        signatures,
        message: VersionedMessage::V0(message),
    })
}

pub fn encode_transaction(transaction: &VersionedTransaction) -> Result<String, bincode::Error> {
    let trx: Vec<u8> = bincode::serialize(transaction)?;
    Ok(general_purpose::STANDARD.encode(trx))
}
