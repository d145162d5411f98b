use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState, handlers::RouteError, messages::wallet::RequestTopupMessage,
    middlewares::basic_auth::AuthedUser,
};

#[derive(Deserialize)]
pub struct TopupPayload {
    amount: i32,
}

pub async fn handle_topup(
    user: AuthedUser,
    payload: Json<TopupPayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    if payload.amount <= 0 {
        return HttpResponse::BadRequest().json(RouteError::new(
            "Amount must be a positive integer",
            400,
            "BadRequest",
        ));
    }
    let conn = app_state.as_ref().db.clone();

    // Topups are always created against the caller's own account.
    let result = conn
        .send(RequestTopupMessage {
            user_id: user.0.id,
            amount: payload.amount,
        })
        .await;

    match result {
        Ok(Ok(topup)) => HttpResponse::Ok().json(json!({
            "topup_id": topup.id,
            "message": "Top-up request submitted successfully",
        })),
        _ => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::TopupPayload;

    #[test]
    fn payload_requires_integer_amount() {
        assert!(serde_json::from_str::<TopupPayload>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<TopupPayload>(r#"{"amount":"lots"}"#).is_err());
        let ok: TopupPayload = serde_json::from_str(r#"{"amount":50}"#).unwrap();
        assert_eq!(ok.amount, 50);
    }
}
