use crate::dto::ROUTE_BASE;
use rocket::fairing::AdHoc;

pub mod pumpdotfun;

pub fn mount() -> AdHoc {
    AdHoc::on_ignite("Attaching Routes", |rocket| async {
        rocket.mount(
            ROUTE_BASE,
            routes![
                pumpdotfun::get_actions,
                pumpdotfun::get_amount,
                pumpdotfun::post_default,
                pumpdotfun::post_amount
            ],
        )
    })
}
