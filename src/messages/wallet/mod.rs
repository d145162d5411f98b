use crate::{errors::wallet::TopupError, models::topup::Topup};
use actix::Message;
use diesel::result::Error as DieselError;

#[derive(Message)]
#[rtype(result = "Result<Topup,DieselError>")]
pub struct RequestTopupMessage {
    pub user_id: i32,
    pub amount: i32,
}

#[derive(Message)]
#[rtype(result = "Result<Topup,TopupError>")]
pub struct ConfirmTopupMessage {
    pub topup_id: i32,
}
