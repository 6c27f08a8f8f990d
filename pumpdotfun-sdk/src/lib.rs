//! Buy-side client for the pump.fun bonding curve program: account decoding,
//! price quotes and instruction building.

pub mod error;
pub mod instruction;
pub mod program;
pub mod provider;
mod sdk;
pub mod state;

pub use error::SdkError;
pub use provider::{EphemeralWallet, Provider, Wallet};
pub use sdk::{buy_instructions, buy_instructions_by_sol_amount, PumpFunSdk};
