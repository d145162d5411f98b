use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    db_utils::AppState, errors::catalog::MovieError, handlers::RouteError,
    messages::catalog::CreateMovieMessage, validation::validate_generic,
};

#[derive(Deserialize)]
pub struct AddMoviePayload {
    name: String,
    launching: NaiveDate,
    category_id: Option<i32>,
    ticket_price: i32,
}

pub async fn handle_add_movie(
    payload: Json<AddMoviePayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    if !validate_generic(&payload.name) || payload.ticket_price < 0 {
        return HttpResponse::BadRequest().json(RouteError::new(
            "Movie name and ticket price must be provided in a valid format",
            400,
            "BadRequest",
        ));
    }
    let conn = app_state.as_ref().db.clone();

    let result = conn
        .send(CreateMovieMessage {
            name: payload.name,
            launching: payload.launching,
            category_id: payload.category_id,
            ticket_price: payload.ticket_price,
        })
        .await;

    match result {
        Ok(Ok(movie)) => HttpResponse::Created().json(movie),
        Ok(Err(MovieError::DuplicateName)) => HttpResponse::BadRequest().json(RouteError::new(
            "The movie is currently airing",
            400,
            "BadRequest",
        )),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::AddMoviePayload;

    #[test]
    fn payload_requires_name_launching_and_price() {
        assert!(serde_json::from_str::<AddMoviePayload>(
            r#"{"launching":"2024-06-01","ticket_price":50}"#
        )
        .is_err());
        assert!(serde_json::from_str::<AddMoviePayload>(
            r#"{"name":"Laskar Pelangi","ticket_price":50}"#
        )
        .is_err());
        let ok: AddMoviePayload = serde_json::from_str(
            r#"{"name":"Laskar Pelangi","launching":"2024-06-01","ticket_price":50}"#,
        )
        .unwrap();
        assert!(ok.category_id.is_none());
    }
}
