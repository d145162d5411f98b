use crate::schema::transactions;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = transactions)]
pub struct Transaction {
    pub id: i32,
    pub user_id: i32,
    pub schedule_id: i32,
    pub date: NaiveDate,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = transactions)]
pub struct NewTransaction {
    pub user_id: i32,
    pub schedule_id: i32,
    pub date: NaiveDate,
}

/// What the buyer gets back after a successful purchase.
#[derive(Serialize)]
pub struct TicketReceipt {
    pub transaction_id: i32,
    pub schedule_id: i32,
    pub date: NaiveDate,
    pub remaining_balance: i32,
}
