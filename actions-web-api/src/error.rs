use crate::dto::ActionErrorBody;
use pumpdotfun_sdk::SdkError;
use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::Json,
    Request,
};
use solana_client::client_error::ClientError;
use solana_sdk::message::CompileError;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Invalid token address '{0}'")]
    InvalidToken(String),

    #[error("Invalid account '{0}'")]
    InvalidAccount(String),

    #[error("Invalid amount '{0}': expected a positive SOL amount")]
    InvalidAmount(String),

    #[error("Token metadata unavailable: {0}")]
    Metadata(String),

    #[error("Metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Sdk(#[from] SdkError),

    #[error("Solana client error: {0}")]
    Rpc(#[from] ClientError),

    #[error("Could not compile transaction: {0}")]
    Compile(#[from] CompileError),

    #[error("Could not serialize transaction: {0}")]
    Serialization(#[from] bincode::Error),
}

impl ActionError {
    pub fn status(&self) -> Status {
        match self {
            ActionError::InvalidToken(_)
            | ActionError::InvalidAccount(_)
            | ActionError::InvalidAmount(_) => Status::BadRequest,
            ActionError::Metadata(_)
            | ActionError::Http(_)
            | ActionError::Sdk(_)
            | ActionError::Rpc(_) => Status::BadGateway,
            ActionError::Compile(_) | ActionError::Serialization(_) => {
                Status::InternalServerError
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ActionError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        warn!("{} {} failed: {}", request.method(), request.uri(), self);
        (status, Json(ActionErrorBody::new(self.to_string()))).respond_to(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn validation_errors_are_client_errors() {
        for error in [
            ActionError::InvalidToken("x".to_owned()),
            ActionError::InvalidAccount("x".to_owned()),
            ActionError::InvalidAmount("x".to_owned()),
        ] {
            assert_eq!(error.status(), Status::BadRequest);
        }
    }

    #[test]
    fn upstream_errors_are_gateway_errors() {
        let mint = Pubkey::new_unique();
        let error = ActionError::from(SdkError::BondingCurveNotFound(mint));
        assert_eq!(error.status(), Status::BadGateway);
        assert_eq!(
            error.to_string(),
            format!("Bonding curve account not found: {}", mint)
        );
        assert_eq!(
            ActionError::Metadata("down".to_owned()).status(),
            Status::BadGateway
        );
    }
}
