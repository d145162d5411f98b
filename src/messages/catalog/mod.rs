use crate::{
    errors::catalog::{MovieError, ScheduleError},
    models::{
        movie::{Movie, MovieChangeset},
        schedule::{ScheduleChangeset, ScheduleDetails},
    },
};
use actix::Message;
use chrono::{NaiveDate, NaiveTime};
use diesel::result::Error as DieselError;
use serde::Serialize;

#[derive(Message)]
#[rtype(result = "Result<Movie,MovieError>")]
pub struct CreateMovieMessage {
    pub name: String,
    pub launching: NaiveDate,
    pub category_id: Option<i32>,
    pub ticket_price: i32,
}

#[derive(Message)]
#[rtype(result = "Result<Movie,MovieError>")]
pub struct UpdateMovieMessage {
    pub id: i32,
    pub changes: MovieChangeset,
}

#[derive(Message)]
#[rtype(result = "Result<(),MovieError>")]
pub struct DeleteMovieMessage {
    pub id: i32,
}

#[derive(Message)]
#[rtype(result = "Result<ScheduleDetails,ScheduleError>")]
pub struct CreateScheduleMessage {
    pub movie_id: i32,
    pub theater_id: i32,
    pub time: NaiveTime,
}

#[derive(Message)]
#[rtype(result = "Result<ScheduleDetails,ScheduleError>")]
pub struct UpdateScheduleMessage {
    pub id: i32,
    pub changes: ScheduleChangeset,
}

#[derive(Message)]
#[rtype(result = "Result<(),ScheduleError>")]
pub struct DeleteScheduleMessage {
    pub id: i32,
}

#[derive(Message)]
#[rtype(result = "Result<Vec<MovieListing>,DieselError>")]
pub struct ListActiveMoviesMessage {
    pub play_date: NaiveDate,
}

#[derive(Message)]
#[rtype(result = "Result<Vec<MovieSearchRow>,DieselError>")]
pub struct SearchMoviesMessage {
    pub query: String,
}

/// One active movie with its showtimes, as returned by the listing endpoint.
#[derive(Serialize)]
pub struct MovieListing {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub ticket_price: i32,
    pub launching: NaiveDate,
    pub schedules: Vec<ScheduleSlot>,
}

#[derive(Serialize)]
pub struct ScheduleSlot {
    #[serde(with = "crate::models::schedule::showtime_format")]
    pub time: NaiveTime,
    pub theater: i32,
}

#[derive(Serialize)]
pub struct MovieSearchRow {
    pub id: i32,
    pub name: String,
    pub launching: NaiveDate,
    pub category: Option<String>,
}
