use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::middlewares::basic_auth::AuthedUser;

pub async fn handle_profile(user: AuthedUser) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "username": user.0.username,
        "balance": user.0.balance,
        "id": user.0.id,
    }))
}
