use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState, errors::auth::UpdateUserError, handlers::RouteError,
    messages::auth::UpdateUserMessage, middlewares::basic_auth::AuthedUser,
};

#[derive(Deserialize)]
pub struct UpdateUserPayload {
    username: Option<String>,
    password: Option<String>,
}

pub async fn handle_update_user(
    user: AuthedUser,
    payload: Json<UpdateUserPayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let conn = app_state.as_ref().db.clone();
    let payload = payload.into_inner();

    let result = conn
        .send(UpdateUserMessage {
            user_id: user.0.id,
            username: payload.username,
            password: payload.password,
        })
        .await;

    match result {
        Ok(Ok(updated)) => HttpResponse::Ok().json(json!({
            "success": true,
            "status": 200,
            "message": "User updated successfully",
            "user": {
                "id": updated.id,
                "username": updated.username,
            }
        })),
        Ok(Err(err)) => match err {
            UpdateUserError::ForbiddenFormat => HttpResponse::BadRequest().json(RouteError::new(
                "Fields must be provided in a valid format",
                400,
                "BadRequest",
            )),
            UpdateUserError::UsernameTaken => HttpResponse::BadRequest().json(RouteError::new(
                "Username already exists",
                400,
                "BadRequest",
            )),
            UpdateUserError::NotFound => HttpResponse::NotFound().json(RouteError::new(
                "User not found",
                404,
                "NotFound",
            )),
            _ => HttpResponse::InternalServerError().json(RouteError::internal()),
        },
        Err(_) => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}
