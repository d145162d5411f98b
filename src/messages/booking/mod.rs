use crate::{errors::booking::BuyTicketError, models::transaction::TicketReceipt};
use actix::Message;
use chrono::NaiveDate;

#[derive(Message)]
#[rtype(result = "Result<TicketReceipt,BuyTicketError>")]
pub struct BuyTicketMessage {
    pub user_id: i32,
    pub schedule_id: i32,
    pub date: NaiveDate,
}
