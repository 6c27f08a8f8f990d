use crate::{dto::DEFAULT_BUY_AMOUNT_SOL, error::ActionError};
use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey};
use std::str::FromStr;

pub const SLIPPAGE_BASIS_POINTS: u64 = 100;

/// Validated buy request, built before any network call is made.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrder {
    pub buyer: Pubkey,
    pub mint: Pubkey,
    pub buy_amount_lamports: u64,
    pub slippage_basis_points: u64,
}

impl PurchaseOrder {
    pub fn new(token: &str, account: &str, amount: Option<&str>) -> Result<Self, ActionError> {
        let mint = parse_token(token)?;
        let buyer =
            Pubkey::from_str(account).map_err(|_| ActionError::InvalidAccount(account.to_owned()))?;
        let buy_amount_lamports = match amount {
            Some(amount) => sol_to_lamports(parse_amount(amount)?)
                .ok_or_else(|| ActionError::InvalidAmount(amount.to_owned()))?,
            None => DEFAULT_BUY_AMOUNT_SOL * LAMPORTS_PER_SOL,
        };

        Ok(PurchaseOrder {
            buyer,
            mint,
            buy_amount_lamports,
            slippage_basis_points: SLIPPAGE_BASIS_POINTS,
        })
    }
}

pub fn parse_token(token: &str) -> Result<Pubkey, ActionError> {
    Pubkey::from_str(token).map_err(|_| ActionError::InvalidToken(token.to_owned()))
}

/// Finite, positive SOL amount
pub fn parse_amount(amount: &str) -> Result<f64, ActionError> {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ActionError::InvalidAmount(amount.to_owned())),
    }
}

/// `None` when the amount rounds to zero lamports or overflows `u64`.
pub fn sol_to_lamports(amount: f64) -> Option<u64> {
    let lamports = (amount * LAMPORTS_PER_SOL as f64).round();
    if lamports < 1.0 || lamports > u64::MAX as f64 {
        return None;
    }
    Some(lamports as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "So11111111111111111111111111111111111111112";
    const ACCOUNT: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    #[test]
    fn one_sol_is_one_billion_lamports_at_100_bps() {
        let order = PurchaseOrder::new(TOKEN, ACCOUNT, Some("1")).unwrap();
        assert_eq!(order.buy_amount_lamports, 1_000_000_000);
        assert_eq!(order.slippage_basis_points, 100);
        assert_eq!(order.mint.to_string(), TOKEN);
        assert_eq!(order.buyer.to_string(), ACCOUNT);
    }

    #[test]
    fn missing_amount_matches_amount_one() {
        assert_eq!(
            PurchaseOrder::new(TOKEN, ACCOUNT, None).unwrap(),
            PurchaseOrder::new(TOKEN, ACCOUNT, Some("1")).unwrap()
        );
    }

    #[test]
    fn fractional_amounts_are_rounded_to_lamports() {
        let order = PurchaseOrder::new(TOKEN, ACCOUNT, Some("0.1")).unwrap();
        assert_eq!(order.buy_amount_lamports, 100_000_000);
        assert_eq!(sol_to_lamports(0.000_000_001), Some(1));
    }

    #[test]
    fn malformed_account_is_rejected() {
        assert!(matches!(
            PurchaseOrder::new(TOKEN, "not-a-key", Some("1")),
            Err(ActionError::InvalidAccount(_))
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(matches!(
            PurchaseOrder::new("0OIl", ACCOUNT, Some("1")),
            Err(ActionError::InvalidToken(_))
        ));
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        for amount in ["abc", "-1", "NaN", "inf", "", "1e30"] {
            assert!(
                matches!(
                    PurchaseOrder::new(TOKEN, ACCOUNT, Some(amount)),
                    Err(ActionError::InvalidAmount(_))
                ),
                "amount {:?} accepted",
                amount
            );
        }
    }

    #[test]
    fn amounts_worth_no_lamports_are_rejected() {
        for amount in ["0", "0.0", "-0", "0.0000000001"] {
            assert!(
                matches!(
                    PurchaseOrder::new(TOKEN, ACCOUNT, Some(amount)),
                    Err(ActionError::InvalidAmount(_))
                ),
                "amount {:?} accepted",
                amount
            );
        }
    }
}
