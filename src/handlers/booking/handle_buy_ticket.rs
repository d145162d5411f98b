use actix_web::{
    web::{Data, Json},
    HttpResponse, Responder,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db_utils::AppState, errors::booking::BuyTicketError, handlers::RouteError,
    messages::booking::BuyTicketMessage, middlewares::basic_auth::AuthedUser,
};

#[derive(Deserialize)]
pub struct BuyTicketPayload {
    schedule_id: i32,
    date: Option<NaiveDate>,
}

pub async fn handle_buy_ticket(
    user: AuthedUser,
    payload: Json<BuyTicketPayload>,
    app_state: Data<AppState>,
) -> impl Responder {
    let state = app_state.as_ref();
    let today = Local::now().date_naive();
    let date = if state.booking.allow_client_date {
        payload.date.unwrap_or(today)
    } else {
        today
    };

    let result = state
        .db
        .send(BuyTicketMessage {
            user_id: user.0.id,
            schedule_id: payload.schedule_id,
            date,
        })
        .await;

    match result {
        Ok(Ok(receipt)) => HttpResponse::Ok().json(json!({
            "message": "Ticket purchased successfully",
            "ticket": receipt,
        })),
        Ok(Err(err)) => match err {
            BuyTicketError::ScheduleNotFound => HttpResponse::NotFound().json(RouteError::new(
                "Schedule not found",
                404,
                "NotFound",
            )),
            BuyTicketError::NotBookable => HttpResponse::BadRequest().json(RouteError::new(
                "This movie is not active for booking",
                400,
                "NotBookable",
            )),
            BuyTicketError::SoldOut => HttpResponse::BadRequest().json(RouteError::new(
                "The schedule has full booking",
                400,
                "SoldOut",
            )),
            BuyTicketError::InsufficientBalance => HttpResponse::BadRequest().json(
                RouteError::new("Insufficient balance", 400, "InsufficientBalance"),
            ),
            _ => HttpResponse::InternalServerError().json(RouteError::internal()),
        },
        Err(_) => HttpResponse::InternalServerError().json(RouteError::internal()),
    }
}

#[cfg(test)]
mod tests {
    use super::BuyTicketPayload;

    #[test]
    fn payload_requires_schedule_id() {
        assert!(serde_json::from_str::<BuyTicketPayload>(r#"{"date":"2024-06-01"}"#).is_err());
        let ok: BuyTicketPayload = serde_json::from_str(r#"{"schedule_id":3}"#).unwrap();
        assert_eq!(ok.schedule_id, 3);
        assert!(ok.date.is_none());
    }

    #[test]
    fn payload_accepts_explicit_date() {
        let ok: BuyTicketPayload =
            serde_json::from_str(r#"{"schedule_id":3,"date":"2024-06-01"}"#).unwrap();
        assert_eq!(ok.date.unwrap().to_string(), "2024-06-01");
    }
}
