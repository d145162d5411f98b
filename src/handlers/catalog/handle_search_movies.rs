use actix_web::{
    web::{Data, Query},
    HttpResponse, Responder,
};
use serde::Deserialize;

use crate::{db_utils::AppState, handlers::RouteError, messages::catalog::SearchMoviesMessage};

#[derive(Deserialize)]
pub struct SearchQuery {
    query: Option<String>,
}

pub async fn handle_search_movies(
    query: Query<SearchQuery>,
    app_state: Data<AppState>,
) -> impl Responder {
    let Some(needle) = query.into_inner().query.filter(|q| !q.is_empty()) else {
        return HttpResponse::BadRequest().json(RouteError::new(
            "Query parameter is required",
            400,
            "BadRequest",
        ));
    };
    let conn = app_state.as_ref().db.clone();

    match conn.send(SearchMoviesMessage { query: needle }).await {
        Ok(Ok(rows)) => HttpResponse::Ok().json(rows),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}
