use actix_web::{
    web::{Data, Query},
    HttpResponse, Responder,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    db_utils::AppState, handlers::RouteError, messages::catalog::ListActiveMoviesMessage,
};

#[derive(Deserialize)]
pub struct ListQuery {
    play_date: Option<String>,
}

pub fn parse_play_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}

pub async fn handle_list_movies(
    query: Query<ListQuery>,
    app_state: Data<AppState>,
) -> impl Responder {
    let Some(raw_date) = query.play_date.as_deref() else {
        return HttpResponse::BadRequest().json(RouteError::new(
            "play_date parameter is required",
            400,
            "BadRequest",
        ));
    };
    let play_date = match parse_play_date(raw_date) {
        Ok(date) => date,
        Err(_) => {
            return HttpResponse::BadRequest().json(RouteError::new(
                "Invalid date format",
                400,
                "BadRequest",
            ))
        }
    };
    let conn = app_state.as_ref().db.clone();

    match conn.send(ListActiveMoviesMessage { play_date }).await {
        Ok(Ok(listings)) => HttpResponse::Ok().json(listings),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_play_date;

    #[test]
    fn parses_iso_dates() {
        let date = parse_play_date("2024-06-01").unwrap();
        assert_eq!(date.to_string(), "2024-06-01");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_play_date("01-06-2024").is_err());
        assert!(parse_play_date("next friday").is_err());
    }
}
