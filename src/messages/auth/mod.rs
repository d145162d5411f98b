use crate::{
    errors::auth::{AuthError, RegisterError, UpdateUserError},
    models::user::User,
};
use actix::Message;

#[derive(Message)]
#[rtype(result = "Result<User,RegisterError>")]
pub struct RegisterMessage {
    pub username: String,
    pub password: String,
}

#[derive(Message)]
#[rtype(result = "Result<User,AuthError>")]
pub struct AuthenticateMessage {
    pub username: String,
    pub password: String,
}

#[derive(Message)]
#[rtype(result = "Result<User,UpdateUserError>")]
pub struct UpdateUserMessage {
    pub user_id: i32,
    pub username: Option<String>,
    pub password: Option<String>,
}
