use rocket::figment::{
    providers::{Env, Format, Toml},
    Figment, Profile,
};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Deserialize, Debug, Clone)]
pub struct ActionsConfig {
    /// Solana JSON-RPC endpoint, also serving the `getAsset` DAS method
    pub rpc_url: String,
    /// Priority fee in micro-lamports per compute unit
    #[serde(default)]
    pub compute_unit_price: Option<u64>,
    #[serde(default = "default_rust_log")]
    pub rust_log: String,
    #[serde(default = "default_actions_log")]
    pub actions_log: String,
}

fn default_rust_log() -> String {
    "warn".to_owned()
}

fn default_actions_log() -> String {
    "info".to_owned()
}

/// Rocket's own providers, port defaulted to 3000, plus the unprefixed
/// service variables (`RPC_URL`, `COMPUTE_UNIT_PRICE`, `RUST_LOG`, `ACTIONS_LOG`).
pub fn figment() -> Figment {
    Figment::from(rocket::Config::default())
        .merge(("port", DEFAULT_PORT))
        .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
        .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
        .merge(Env::raw().only(&["rpc_url", "compute_unit_price", "rust_log", "actions_log"]))
        .select(Profile::from_env_or(
            "ROCKET_PROFILE",
            rocket::Config::DEFAULT_PROFILE,
        ))
}
