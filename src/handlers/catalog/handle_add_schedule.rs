use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use chrono::NaiveTime;
use serde::Deserialize;

use crate::{
    db_utils::AppState, errors::catalog::ScheduleError, handlers::RouteError,
    messages::catalog::CreateScheduleMessage, models::schedule::showtime_format,
};

#[derive(Deserialize)]
pub struct AddSchedulePayload {
    movie_id: i32,
    theater_id: i32,
    #[serde(deserialize_with = "showtime_format::deserialize")]
    time: NaiveTime,
}

pub async fn handle_add_schedule(
    payload: Json<AddSchedulePayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let conn = app_state.as_ref().db.clone();

    let result = conn
        .send(CreateScheduleMessage {
            movie_id: payload.movie_id,
            theater_id: payload.theater_id,
            time: payload.time,
        })
        .await;

    match result {
        Ok(Ok(schedule)) => HttpResponse::Created().json(schedule),
        Ok(Err(err)) => match err {
            ScheduleError::MovieNotFound => {
                HttpResponse::NotFound().json(RouteError::new("Movie not found", 404, "NotFound"))
            }
            ScheduleError::TheaterNotFound => {
                HttpResponse::NotFound().json(RouteError::new("Theater not found", 404, "NotFound"))
            }
            ScheduleError::DuplicateSchedule => HttpResponse::Conflict().json(RouteError::new(
                "The schedule already exists",
                409,
                "Conflict",
            )),
            _ => HttpResponse::InternalServerError().json(RouteError::internal()),
        },
        Err(_) => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::AddSchedulePayload;

    #[test]
    fn payload_parses_hour_minute_showtime() {
        let ok: AddSchedulePayload =
            serde_json::from_str(r#"{"movie_id":1,"theater_id":2,"time":"19:30"}"#).unwrap();
        assert_eq!(ok.movie_id, 1);
        assert_eq!(ok.time.format("%H:%M").to_string(), "19:30");
    }

    #[test]
    fn payload_rejects_bad_showtime() {
        assert!(serde_json::from_str::<AddSchedulePayload>(
            r#"{"movie_id":1,"theater_id":2,"time":"late"}"#
        )
        .is_err());
    }
}
