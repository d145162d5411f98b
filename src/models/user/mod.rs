use crate::schema::users;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

#[derive(Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub hashed_password: String,
    pub balance: i32,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[derive(Insertable, Serialize, Debug, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub hashed_password: String,
    pub balance: i32,
    pub role: String,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub username: Option<String>,
    pub hashed_password: Option<String>,
}

impl UserChangeset {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.hashed_password.is_none()
    }
}
