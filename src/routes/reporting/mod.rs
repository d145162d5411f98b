use actix_web::web::{self, get, ServiceConfig};

use crate::handlers::reporting::handle_top_movies::handle_top_movies;
use crate::middlewares::basic_auth::RequireAuth;

pub fn init_reporting_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/topmovie")
            .wrap(RequireAuth::any_role())
            .route(get().to(handle_top_movies)),
    );
}
