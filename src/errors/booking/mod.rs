use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuyTicketError {
    #[error("Schedule not found")]
    ScheduleNotFound,
    #[error("This movie is not active for booking")]
    NotBookable,
    #[error("The schedule has full booking")]
    SoldOut,
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Diesel error")]
    DieselError(#[from] DieselError),
}
