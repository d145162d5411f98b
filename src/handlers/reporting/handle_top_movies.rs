use actix_web::{web::Data, HttpResponse, Responder};

use crate::{db_utils::AppState, handlers::RouteError, messages::reporting::TopMoviesMessage};

const TOP_MOVIE_LIMIT: i64 = 5;

pub async fn handle_top_movies(app_state: Data<AppState>) -> impl Responder {
    let conn = app_state.as_ref().db.clone();

    match conn
        .send(TopMoviesMessage {
            limit: TOP_MOVIE_LIMIT,
        })
        .await
    {
        Ok(Ok(top)) => HttpResponse::Ok().json(top),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}
