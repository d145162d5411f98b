use crate::schema::theaters;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = theaters)]
pub struct Theater {
    pub id: i32,
    pub room: i32,
    pub total_seat: i32,
}
