use crate::schema::topups;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = topups)]
pub struct Topup {
    pub id: i32,
    pub user_id: i32,
    pub amount: i32,
    pub is_confirmed: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = topups)]
pub struct NewTopup {
    pub user_id: i32,
    pub amount: i32,
    pub is_confirmed: bool,
}
