use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState,
    errors::catalog::MovieError,
    handlers::RouteError,
    messages::catalog::{DeleteMovieMessage, UpdateMovieMessage},
    models::movie::MovieChangeset,
};

#[derive(Deserialize)]
pub struct UpdateMoviePayload {
    id: i32,
    name: Option<String>,
    launching: Option<NaiveDate>,
    category_id: Option<i32>,
    ticket_price: Option<i32>,
}

#[derive(Deserialize)]
pub struct DeleteMoviePayload {
    id: i32,
}

pub async fn handle_update_movie(
    payload: Json<UpdateMoviePayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let conn = app_state.as_ref().db.clone();

    let result = conn
        .send(UpdateMovieMessage {
            id: payload.id,
            changes: MovieChangeset {
                name: payload.name,
                launching: payload.launching,
                category_id: payload.category_id,
                ticket_price: payload.ticket_price,
            },
        })
        .await;

    match result {
        Ok(Ok(movie)) => HttpResponse::Ok().json(json!({
            "message": "Movie updated successfully",
            "movie": movie,
        })),
        Ok(Err(MovieError::NotFound)) => {
            HttpResponse::NotFound().json(RouteError::new("Movie not found", 404, "NotFound"))
        }
        Ok(Err(MovieError::DuplicateName)) => HttpResponse::BadRequest().json(RouteError::new(
            "The movie is currently airing",
            400,
            "BadRequest",
        )),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

pub async fn handle_delete_movie(
    payload: Json<DeleteMoviePayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let conn = app_state.as_ref().db.clone();

    let result = conn.send(DeleteMovieMessage { id: payload.id }).await;

    match result {
        Ok(Ok(())) => HttpResponse::Ok().json(json!({
            "message": "Movie deleted successfully",
        })),
        Ok(Err(MovieError::NotFound)) => {
            HttpResponse::NotFound().json(RouteError::new("Movie not found", 404, "NotFound"))
        }
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}
