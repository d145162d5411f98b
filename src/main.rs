mod actors;
mod config;
mod db_utils;
mod errors;
mod handlers;
mod messages;
mod middlewares;
mod models;
mod routes;
mod schema;
mod validation;
use actix::SyncArbiter;
use config::AppConfig;
use db_utils::{get_db_pool, AppState, DbActor};
use dotenv::dotenv;

use actix_web::{web::Data, App, HttpServer};
use routes::init_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let app_config = AppConfig::from_env();
    let pool = get_db_pool(&app_config.database_url);
    let db_addr = SyncArbiter::start(5, move || DbActor(pool.clone()));
    let state = AppState {
        db: db_addr,
        booking: app_config.booking,
    };
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(app_config.bind_addr.as_str())?
    .run()
    .await
}
