use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use chrono::NaiveTime;
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState,
    errors::catalog::ScheduleError,
    handlers::RouteError,
    messages::catalog::{DeleteScheduleMessage, UpdateScheduleMessage},
    models::schedule::{showtime_format, ScheduleChangeset},
};

#[derive(Deserialize)]
pub struct UpdateSchedulePayload {
    id: i32,
    movie_id: Option<i32>,
    theater_id: Option<i32>,
    #[serde(default, deserialize_with = "showtime_format::deserialize_option")]
    time: Option<NaiveTime>,
}

#[derive(Deserialize)]
pub struct DeleteSchedulePayload {
    id: i32,
}

pub async fn handle_update_schedule(
    payload: Json<UpdateSchedulePayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let conn = app_state.as_ref().db.clone();

    let result = conn
        .send(UpdateScheduleMessage {
            id: payload.id,
            changes: ScheduleChangeset {
                movie_id: payload.movie_id,
                theater_id: payload.theater_id,
                time: payload.time,
            },
        })
        .await;

    match result {
        Ok(Ok(schedule)) => HttpResponse::Ok().json(schedule),
        Ok(Err(err)) => match err {
            ScheduleError::NotFound => HttpResponse::NotFound().json(RouteError::new(
                "Schedule not found",
                404,
                "NotFound",
            )),
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

pub async fn handle_delete_schedule(
    payload: Json<DeleteSchedulePayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let conn = app_state.as_ref().db.clone();

    let result = conn.send(DeleteScheduleMessage { id: payload.id }).await;

    match result {
        Ok(Ok(())) => HttpResponse::Ok().json(json!({
            "message": "Schedule deleted successfully",
        })),
        Ok(Err(ScheduleError::NotFound)) => {
            HttpResponse::NotFound().json(RouteError::new("Schedule not found", 404, "NotFound"))
        }
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}
