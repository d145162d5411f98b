pub mod movie;
pub mod schedule;
pub mod theater;
pub mod topup;
pub mod transaction;
pub mod user;
