use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState, errors::auth::RegisterError, handlers::RouteError,
    messages::auth::RegisterMessage,
};

#[derive(Deserialize)]
pub struct RegisterPayload {
    username: String,
    password: String,
}

pub async fn handle_register(
    payload: Json<RegisterPayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let conn = app_state.as_ref().db.clone();

    let result = conn
        .send(RegisterMessage {
            username: payload.username.clone(),
            password: payload.password.clone(),
        })
        .await;

    match result {
        Ok(Ok(user)) => HttpResponse::Created().json(json!({
            "success": true,
            "status": 201,
            "message": "Registered successfully",
            "user": {
                "id": user.id,
                "username": user.username,
            }
        })),
        Ok(Err(err)) => match err {
            RegisterError::ForbiddenFormat => HttpResponse::BadRequest().json(RouteError::new(
                "Username and password must be provided in a valid format",
                400,
                "BadRequest",
            )),
            RegisterError::UsernameAlreadyRegistered => HttpResponse::BadRequest()
                .json(RouteError::new("Username already exists", 400, "BadRequest")),
            _ => HttpResponse::InternalServerError().json(RouteError::internal()),
        },
        Err(_) => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::RegisterPayload;

    #[test]
    fn payload_requires_both_fields() {
        assert!(serde_json::from_str::<RegisterPayload>(r#"{"username":"budi"}"#).is_err());
        assert!(serde_json::from_str::<RegisterPayload>(r#"{"password":"rahasia"}"#).is_err());
        let ok: RegisterPayload =
            serde_json::from_str(r#"{"username":"budi","password":"rahasia"}"#).unwrap();
        assert_eq!(ok.username, "budi");
    }
}
