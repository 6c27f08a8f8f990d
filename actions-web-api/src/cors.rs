use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{Request, Response};

pub const ALLOWED_METHODS: &str = "GET,POST,PUT,OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization, Content-Encoding, Accept-Encoding";

/// Actions are fetched cross-origin by wallets and blink clients, so every
/// response allows any origin.
pub struct ActionsCors;

#[rocket::async_trait]
impl Fairing for ActionsCors {
    fn info(&self) -> Info {
        Info {
            name: "Actions CORS Policy",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        response.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
    }
}

#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::NoContent
}
