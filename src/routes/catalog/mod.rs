use actix_web::web::{self, delete, get, post, put, ServiceConfig};

use crate::handlers::catalog::{
    handle_add_movie::handle_add_movie,
    handle_add_schedule::handle_add_schedule,
    handle_list_movies::handle_list_movies,
    handle_search_movies::handle_search_movies,
    handle_update_movie::{handle_delete_movie, handle_update_movie},
    handle_update_schedule::{handle_delete_schedule, handle_update_schedule},
};
use crate::middlewares::basic_auth::RequireAuth;

pub fn init_catalog_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/add/movie/")
            .wrap(RequireAuth::admin_only())
            .route(post().to(handle_add_movie)),
    )
    .service(
        web::resource("/update/movie/")
            .wrap(RequireAuth::admin_only())
            .route(put().to(handle_update_movie))
            .route(delete().to(handle_delete_movie)),
    )
    .service(
        web::resource("/add/schedule/")
            .wrap(RequireAuth::admin_only())
            .route(post().to(handle_add_schedule)),
    )
    .service(
        web::resource("/update/schedule/")
            .wrap(RequireAuth::admin_only())
            .route(put().to(handle_update_schedule))
            .route(delete().to(handle_delete_schedule)),
    )
    .service(
        web::resource("/list/")
            .wrap(RequireAuth::any_role())
            .route(get().to(handle_list_movies)),
    )
    .service(
        web::resource("/search/")
            .wrap(RequireAuth::any_role())
            .route(get().to(handle_search_movies)),
    );
}
