pub mod auth;
pub mod booking;
pub mod catalog;
pub mod reporting;
pub mod wallet;

use actix_web::web::ServiceConfig;
use auth::init_auth_routes;
use booking::init_booking_routes;
use catalog::init_catalog_routes;
use reporting::init_reporting_routes;
use wallet::init_wallet_routes;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.configure(init_auth_routes)
        .configure(init_catalog_routes)
        .configure(init_wallet_routes)
        .configure(init_booking_routes)
        .configure(init_reporting_routes);
}
