use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState, errors::wallet::TopupError, handlers::RouteError,
    messages::wallet::ConfirmTopupMessage,
};

#[derive(Deserialize)]
pub struct ConfirmTopupPayload {
    id: i32,
}

pub async fn handle_confirm_topup(
    payload: Json<ConfirmTopupPayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let conn = app_state.as_ref().db.clone();

    let result = conn.send(ConfirmTopupMessage { topup_id: payload.id }).await;

    match result {
        Ok(Ok(topup)) => HttpResponse::Ok().json(json!({
            "topup_id": topup.id,
            "message": "Top-up request confirmed successfully",
        })),
        Ok(Err(TopupError::NotFound)) => HttpResponse::NotFound().json(RouteError::new(
            "Top-up request not found",
            404,
            "NotFound",
        )),
        Ok(Err(TopupError::AlreadyConfirmed)) => HttpResponse::BadRequest().json(RouteError::new(
            "Top-up request has already been confirmed",
            400,
            "AlreadyConfirmed",
        )),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}
