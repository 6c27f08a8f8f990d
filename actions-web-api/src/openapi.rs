use crate::dto::{
    ActionErrorBody, ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest,
    ActionPostResponse, LinkedAction,
};
use crate::routes::pumpdotfun;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "An API", version = "v1"),
    paths(
        pumpdotfun::get_actions,
        pumpdotfun::get_amount,
        pumpdotfun::post_default,
        pumpdotfun::post_amount
    ),
    components(schemas(
        ActionGetResponse,
        ActionLinks,
        LinkedAction,
        ActionParameter,
        ActionPostRequest,
        ActionPostResponse,
        ActionErrorBody
    )),
    tags((name = "PumpDotFun", description = "Buy pump.fun tokens from their bonding curve"))
)]
pub struct ApiDoc;
