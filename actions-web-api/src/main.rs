mod config;
mod cors;
mod dto;
mod error;
mod metadata;
mod openapi;
mod purchase;
mod routes;
mod transaction_utils;

use config::ActionsConfig;
use dto::ActionErrorBody;
use rocket::{
    fairing::AdHoc, figment::Figment, http::Status, response::status::Custom,
    serde::json::Json, Build, Request, Rocket,
};
use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[macro_use]
extern crate rocket;

#[get("/")]
async fn health_ping() -> &'static str {
    ""
}

#[catch(404)]
async fn not_found(req: &Request<'_>) -> Custom<Json<ActionErrorBody>> {
    let message = format!("Couldn't find '{}'", req.uri());
    Custom(Status::NotFound, Json(ActionErrorBody::new(message)))
}

const BODY_SHAPE_MESSAGE: &str =
    "Request body should be JSON of the form {\"account\": \"<public key>\"}.";

#[catch(400)]
async fn bad_request() -> Custom<Json<ActionErrorBody>> {
    Custom(
        Status::BadRequest,
        Json(ActionErrorBody::new(BODY_SHAPE_MESSAGE.to_owned())),
    )
}

#[catch(422)]
async fn unprocessable_body() -> Custom<Json<ActionErrorBody>> {
    Custom(
        Status::UnprocessableEntity,
        Json(ActionErrorBody::new(BODY_SHAPE_MESSAGE.to_owned())),
    )
}

#[catch(500)]
async fn internal_error() -> Custom<Json<ActionErrorBody>> {
    Custom(
        Status::InternalServerError,
        Json(ActionErrorBody::new(
            "Whoops! Looks like we messed up.".to_owned(),
        )),
    )
}

#[catch(default)]
async fn default_catcher(status: Status, _req: &Request<'_>) -> Custom<Json<ActionErrorBody>> {
    Custom(status, Json(ActionErrorBody::new(status.to_string())))
}

fn init_tracing(figment: &Figment) {
    let rust_log = figment
        .extract_inner::<String>("rust_log")
        .unwrap_or_else(|_| "warn".to_owned());
    let actions_log = figment
        .extract_inner::<String>("actions_log")
        .unwrap_or_else(|_| "info".to_owned());
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", rust_log);
    }

    let env_filter = EnvFilter::from_default_env();
    let env_filter = match format!("actions_web_api={}", actions_log).parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::FULL)
        .init();
}

fn build(figment: Figment) -> Rocket<Build> {
    let reqwest_client = reqwest::Client::new();

    rocket::custom(figment)
        .register(
            "/",
            catchers![
                not_found,
                bad_request,
                unprocessable_body,
                internal_error,
                default_catcher
            ],
        )
        .attach(AdHoc::config::<ActionsConfig>())
        .attach(AdHoc::on_liftoff("Actions Banner", |rocket| {
            Box::pin(async move {
                let port = rocket.config().port;
                info!("Server is running on port {}", port);
                info!(
                    "Visit http://localhost:{}/swagger-ui/ to explore existing actions",
                    port
                );
            })
        }))
        .attach(cors::ActionsCors)
        .manage(reqwest_client)
        .attach(routes::mount())
        .mount("/", routes![health_ping, cors::preflight])
        .mount(
            "/",
            SwaggerUi::new("/swagger-ui/<_..>").url("/doc", openapi::ApiDoc::openapi()),
        )
}

#[launch]
fn rocket() -> _ {
    let figment = config::figment();
    init_tracing(&figment);
    build(figment)
}
