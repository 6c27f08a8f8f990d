use crate::config::ActionsConfig;
use crate::dto::{ActionErrorBody, ActionGetResponse, ActionPostRequest, ActionPostResponse};
use crate::error::ActionError;
use crate::metadata;
use crate::purchase::{self, PurchaseOrder};
use crate::transaction_utils;
use pumpdotfun_sdk::{EphemeralWallet, Provider, PumpFunSdk};
use rocket::{serde::json::Json, State};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use tracing::{debug, info};

#[utoipa::path(
    get,
    path = "/api/pumpdotfun/{token}",
    tag = "PumpDotFun",
    params(("token" = String, Path, description = "Mint address of the token")),
    responses(
        (status = 200, description = "Buy actions for the token", body = ActionGetResponse),
        (status = 400, description = "Invalid token address", body = ActionErrorBody),
        (status = 502, description = "Token metadata unavailable", body = ActionErrorBody)
    )
)]
#[get("/<token>")]
pub async fn get_actions(
    client: &State<reqwest::Client>,
    actions_config: &State<ActionsConfig>,
    token: &str,
) -> Result<Json<ActionGetResponse>, ActionError> {
    purchase::parse_token(token)?;
    let token_info = metadata::get_token_info(client, &actions_config.rpc_url, token).await?;

    Ok(Json(ActionGetResponse::with_actions(token, &token_info)))
}

#[utoipa::path(
    get,
    path = "/api/pumpdotfun/{token}/{amount}",
    tag = "PumpDotFun",
    params(
        ("token" = String, Path, description = "Mint address of the token"),
        ("amount" = String, Path, description = "SOL amount to spend", example = "1")
    ),
    responses(
        (status = 200, description = "Token card for the chosen amount", body = ActionGetResponse),
        (status = 400, description = "Invalid token address or amount", body = ActionErrorBody),
        (status = 502, description = "Token metadata unavailable", body = ActionErrorBody)
    )
)]
#[get("/<token>/<amount>")]
pub async fn get_amount(
    client: &State<reqwest::Client>,
    actions_config: &State<ActionsConfig>,
    token: &str,
    amount: &str,
) -> Result<Json<ActionGetResponse>, ActionError> {
    purchase::parse_token(token)?;
    purchase::parse_amount(amount)?;
    let token_info = metadata::get_token_info(client, &actions_config.rpc_url, token).await?;

    Ok(Json(ActionGetResponse::new(&token_info)))
}

#[utoipa::path(
    post,
    path = "/api/pumpdotfun/{token}",
    tag = "PumpDotFun",
    params(("token" = String, Path, description = "Mint address of the token")),
    request_body = ActionPostRequest,
    responses(
        (status = 200, description = "Unsigned buy transaction for the default amount", body = ActionPostResponse),
        (status = 400, description = "Invalid token address or account", body = ActionErrorBody),
        (status = 502, description = "RPC or bonding curve failure", body = ActionErrorBody)
    )
)]
#[post("/<token>", data = "<request>")]
pub async fn post_default(
    actions_config: &State<ActionsConfig>,
    token: &str,
    request: Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let order = PurchaseOrder::new(token, &request.account, None)?;
    build_buy_transaction(actions_config, order).await
}

#[utoipa::path(
    post,
    path = "/api/pumpdotfun/{token}/{amount}",
    tag = "PumpDotFun",
    params(
        ("token" = String, Path, description = "Mint address of the token"),
        ("amount" = String, Path, description = "SOL amount to spend", example = "1")
    ),
    request_body = ActionPostRequest,
    responses(
        (status = 200, description = "Unsigned buy transaction", body = ActionPostResponse),
        (status = 400, description = "Invalid token address, account or amount", body = ActionErrorBody),
        (status = 502, description = "RPC or bonding curve failure", body = ActionErrorBody)
    )
)]
#[post("/<token>/<amount>", data = "<request>")]
pub async fn post_amount(
    actions_config: &State<ActionsConfig>,
    token: &str,
    amount: &str,
    request: Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let order = PurchaseOrder::new(token, &request.account, Some(amount))?;
    build_buy_transaction(actions_config, order).await
}

async fn build_buy_transaction(
    actions_config: &ActionsConfig,
    order: PurchaseOrder,
) -> Result<Json<ActionPostResponse>, ActionError> {
    info!(
        "buy started mint={} buyer={} lamports={}",
        order.mint, order.buyer, order.buy_amount_lamports
    );

    let connection = RpcClient::new_with_commitment(
        actions_config.rpc_url.to_owned(),
        CommitmentConfig::finalized(),
    );
    let provider = Provider::new(
        connection,
        Box::new(EphemeralWallet::generate()),
        CommitmentConfig::finalized(),
    );
    let sdk = PumpFunSdk::new(provider);

    let instructions = sdk
        .get_buy_instructions_by_sol_amount(
            &order.buyer,
            &order.mint,
            order.buy_amount_lamports,
            order.slippage_basis_points,
        )
        .await?;

    let transaction = transaction_utils::prepare_transaction(
        sdk.provider().connection(),
        instructions,
        &order.buyer,
        actions_config.compute_unit_price,
    )
    .await?;
    debug!("{:?}", transaction);

    let encoded = transaction_utils::encode_transaction(&transaction)?;
    Ok(Json(ActionPostResponse::new(encoded)))
}
