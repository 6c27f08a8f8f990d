use crate::error::ActionError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TokenInfo {
    pub content: AssetContent,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssetContent {
    pub metadata: AssetMetadata,
    pub links: AssetLinks,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssetMetadata {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssetLinks {
    pub image: String,
}

/// DAS `getAsset` lookup against the configured RPC endpoint
pub async fn get_token_info(
    client: &reqwest::Client,
    rpc_url: &str,
    address: &str,
) -> Result<TokenInfo, ActionError> {
    let request = json!({
        "jsonrpc": "2.0",
        "id": "text",
        "method": "getAsset",
        "params": {
            "id": address,
        },
    });

    let response = client
        .post(rpc_url)
        .json(&request)
        .header("User-Agent", "Actions Web Api")
        .send()
        .await?;
    let body = response.json::<Value>().await?;
    debug!("getAsset {}: {}", address, body);

    parse_asset_response(address, body)
}

pub fn parse_asset_response(address: &str, mut body: Value) -> Result<TokenInfo, ActionError> {
    if let Some(error) = body.get("error") {
        let message = format!("getAsset {} returned error: {}", address, error);
        warn!("{}", message);
        return Err(ActionError::Metadata(message));
    }

    match body.get_mut("result").map(Value::take) {
        Some(Value::Null) | None => {
            let message = format!("getAsset {} returned no result", address);
            warn!("{}", message);
            Err(ActionError::Metadata(message))
        }
        Some(result) => serde_json::from_value::<TokenInfo>(result).map_err(|error| {
            let message = format!("Error in parsing getAsset {} result: {}", address, error);
            warn!("{}", message);
            ActionError::Metadata(message)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "So11111111111111111111111111111111111111112";

    #[test]
    fn parses_das_asset() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": "text",
            "result": {
                "interface": "FungibleToken",
                "content": {
                    "metadata": {"name": "Wrapped SOL", "symbol": "SOL", "description": "wrapped"},
                    "links": {"image": "https://example.com/sol.png"}
                }
            }
        });

        let token = parse_asset_response(ADDRESS, body).unwrap();
        assert_eq!(token.content.metadata.name, "Wrapped SOL");
        assert_eq!(token.content.metadata.symbol, "SOL");
        assert_eq!(token.content.links.image, "https://example.com/sol.png");
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let body = json!({
            "result": {
                "content": {
                    "metadata": {"name": "Token", "symbol": "TKN"},
                    "links": {"image": "https://example.com/t.png"}
                }
            }
        });

        let token = parse_asset_response(ADDRESS, body).unwrap();
        assert_eq!(token.content.metadata.description, "");
    }

    #[test]
    fn missing_result_fails() {
        let body = json!({"jsonrpc": "2.0", "id": "text"});
        assert!(matches!(
            parse_asset_response(ADDRESS, body),
            Err(ActionError::Metadata(_))
        ));
    }

    #[test]
    fn null_result_fails() {
        let body = json!({"jsonrpc": "2.0", "id": "text", "result": null});
        assert!(matches!(
            parse_asset_response(ADDRESS, body),
            Err(ActionError::Metadata(_))
        ));
    }

    #[test]
    fn rpc_error_fails() {
        let body = json!({"error": {"code": -32000, "message": "Asset not found"}});
        match parse_asset_response(ADDRESS, body) {
            Err(ActionError::Metadata(message)) => assert!(message.contains("Asset not found")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn result_without_content_fails() {
        let body = json!({"result": {"id": ADDRESS}});
        assert!(matches!(
            parse_asset_response(ADDRESS, body),
            Err(ActionError::Metadata(_))
        ));
    }
}
