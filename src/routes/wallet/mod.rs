use actix_web::web::{self, post, put, ServiceConfig};

use crate::handlers::wallet::{
    handle_confirm_topup::handle_confirm_topup, handle_topup::handle_topup,
};
use crate::middlewares::basic_auth::RequireAuth;

pub fn init_wallet_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/topup/")
            .wrap(RequireAuth::any_role())
            .route(post().to(handle_topup)),
    )
    .service(
        web::resource("/confirm/topup/")
            .wrap(RequireAuth::admin_only())
            .route(put().to(handle_confirm_topup)),
    );
}
