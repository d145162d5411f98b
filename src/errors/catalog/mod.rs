use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieError {
    #[error("A movie with this name is currently airing")]
    DuplicateName,
    #[error("Movie not found")]
    NotFound,
    #[error("Diesel error")]
    DieselError(#[from] DieselError),
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Theater not found")]
    TheaterNotFound,
    #[error("The schedule already exists")]
    DuplicateSchedule,
    #[error("Schedule not found")]
    NotFound,
    #[error("Diesel error")]
    DieselError(#[from] DieselError),
}
