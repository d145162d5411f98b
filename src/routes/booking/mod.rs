use actix_web::web::{self, post, ServiceConfig};

use crate::handlers::booking::handle_buy_ticket::handle_buy_ticket;
use crate::middlewares::basic_auth::RequireAuth;

pub fn init_booking_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/buy/ticket")
            .wrap(RequireAuth::any_role())
            .route(post().to(handle_buy_ticket)),
    );
}
