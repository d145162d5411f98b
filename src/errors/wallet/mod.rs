use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopupError {
    #[error("Top-up request not found")]
    NotFound,
    #[error("Top-up request has already been confirmed")]
    AlreadyConfirmed,
    #[error("Diesel error")]
    DieselError(#[from] DieselError),
}
