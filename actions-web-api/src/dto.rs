use crate::metadata::TokenInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROUTE_BASE: &str = "/api/pumpdotfun";
pub const BUY_AMOUNT_SOL_OPTIONS: [u64; 3] = [1, 5, 10];
pub const DEFAULT_BUY_AMOUNT_SOL: u64 = 1;
pub const AMOUNT_PARAMETER_NAME: &str = "amount";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ActionGetResponse {
    pub icon: String,
    pub label: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

impl ActionGetResponse {
    /// Token card without actions, served once an amount is chosen
    pub fn new(token: &TokenInfo) -> ActionGetResponse {
        ActionGetResponse {
            icon: token.content.links.image.to_owned(),
            label: format!("{} SOL", DEFAULT_BUY_AMOUNT_SOL),
            title: token.content.metadata.name.to_owned(),
            description: token.content.metadata.description.to_owned(),
            links: None,
        }
    }

    /// Token card listing the preset amounts and a free-form amount action
    pub fn with_actions(address: &str, token: &TokenInfo) -> ActionGetResponse {
        let mut actions: Vec<LinkedAction> = BUY_AMOUNT_SOL_OPTIONS
            .iter()
            .map(|amount| LinkedAction {
                label: format!("{} SOL", amount),
                href: format!("{}/{}/{}", ROUTE_BASE, address, amount),
                parameters: None,
            })
            .collect();
        actions.push(LinkedAction {
            label: format!("Buy {}", token.content.metadata.symbol),
            href: format!("{}/{}/{{{}}}", ROUTE_BASE, address, AMOUNT_PARAMETER_NAME),
            parameters: Some(vec![ActionParameter {
                name: AMOUNT_PARAMETER_NAME.to_owned(),
                label: "Enter a custom SOL amount".to_owned(),
            }]),
        });

        ActionGetResponse {
            links: Some(ActionLinks { actions }),
            ..ActionGetResponse::new(token)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct LinkedAction {
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ActionPostRequest {
    /// Base58 public key of the buyer, fee payer of the returned transaction
    pub account: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ActionPostResponse {
    /// Base64 of the bincode serialized, unsigned transaction
    pub transaction: String,
}

impl ActionPostResponse {
    pub fn new(transaction: String) -> ActionPostResponse {
        ActionPostResponse { transaction }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ActionErrorBody {
    pub message: String,
}

impl ActionErrorBody {
    pub fn new(message: String) -> ActionErrorBody {
        ActionErrorBody { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AssetContent, AssetLinks, AssetMetadata};

    const ADDRESS: &str = "So11111111111111111111111111111111111111112";

    fn token(name: &str, symbol: &str) -> TokenInfo {
        TokenInfo {
            content: AssetContent {
                metadata: AssetMetadata {
                    name: name.to_owned(),
                    symbol: symbol.to_owned(),
                    description: "a meme".to_owned(),
                },
                links: AssetLinks {
                    image: "https://example.com/icon.png".to_owned(),
                },
            },
        }
    }

    #[test]
    fn discovery_lists_presets_and_custom_amount() {
        let response = ActionGetResponse::with_actions(ADDRESS, &token("Wrapped", "WSOL"));
        let actions = response.links.unwrap().actions;

        assert_eq!(actions.len(), BUY_AMOUNT_SOL_OPTIONS.len() + 1);
        for (action, amount) in actions.iter().zip(BUY_AMOUNT_SOL_OPTIONS) {
            assert_eq!(action.label, format!("{} SOL", amount));
            assert_eq!(action.href, format!("/api/pumpdotfun/{}/{}", ADDRESS, amount));
            assert!(action.parameters.is_none());
        }

        let custom = actions.last().unwrap();
        assert_eq!(custom.label, "Buy WSOL");
        assert_eq!(custom.href, format!("/api/pumpdotfun/{}/{{amount}}", ADDRESS));
        let parameters = custom.parameters.as_ref().unwrap();
        assert_eq!(parameters[0].name, "amount");
        assert_eq!(parameters[0].label, "Enter a custom SOL amount");
        assert!(actions.iter().all(|action| action.href.contains(ADDRESS)));
    }

    #[test]
    fn label_is_default_amount_regardless_of_token() {
        for (name, symbol) in [("Wrapped", "WSOL"), ("Bonk", "BONK")] {
            let token = token(name, symbol);
            assert_eq!(ActionGetResponse::with_actions(ADDRESS, &token).label, "1 SOL");
            assert_eq!(ActionGetResponse::new(&token).label, "1 SOL");
        }
    }

    #[test]
    fn card_without_actions_omits_links() {
        let response = ActionGetResponse::new(&token("Wrapped", "WSOL"));
        assert_eq!(response.title, "Wrapped");
        assert_eq!(response.icon, "https://example.com/icon.png");
        assert_eq!(response.description, "a meme");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("links").is_none());
    }

    #[test]
    fn post_response_only_carries_transaction() {
        let json = serde_json::to_value(ActionPostResponse::new("AQID".to_owned())).unwrap();
        assert_eq!(json, serde_json::json!({ "transaction": "AQID" }));
    }
}
