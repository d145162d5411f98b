use actix_web::web::{self, get, post, put, ServiceConfig};

use crate::handlers::auth::{
    handle_profile::handle_profile, handle_register::handle_register,
    handle_update_user::handle_update_user,
};
use crate::middlewares::basic_auth::RequireAuth;

pub fn init_auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(web::resource("/register/").route(post().to(handle_register)))
        .service(
            web::resource("/update/user/")
                .wrap(RequireAuth::any_role())
                .route(put().to(handle_update_user)),
        )
        .service(
            web::resource("/user/")
                .wrap(RequireAuth::any_role())
                .route(get().to(handle_profile)),
        );
}
