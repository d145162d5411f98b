use crate::db_utils::DbActor;
use crate::errors::wallet::TopupError;
use crate::messages::wallet::{ConfirmTopupMessage, RequestTopupMessage};
use crate::models::topup::{NewTopup, Topup};
use crate::schema::{topups, users};
use actix::Handler;
use diesel::prelude::*;
use diesel::result::Error;

impl Handler<RequestTopupMessage> for DbActor {
    type Result = Result<Topup, Error>;

    fn handle(&mut self, msg: RequestTopupMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        diesel::insert_into(topups::table)
            .values(&NewTopup {
                user_id: msg.user_id,
                amount: msg.amount,
                is_confirmed: false,
            })
            .get_result::<Topup>(&mut conn)
    }
}

impl Handler<ConfirmTopupMessage> for DbActor {
    type Result = Result<Topup, TopupError>;

    fn handle(&mut self, msg: ConfirmTopupMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");

        // Confirmation is terminal: the row lock makes the confirmed check
        // and the balance credit a single step, so a topup can only ever
        // credit its owner once.
        conn.transaction::<Topup, TopupError, _>(|conn| {
            let topup = topups::table
                .find(msg.topup_id)
                .for_update()
                .first::<Topup>(conn)
                .optional()?
                .ok_or(TopupError::NotFound)?;
            if topup.is_confirmed {
                return Err(TopupError::AlreadyConfirmed);
            }
            diesel::update(users::table.find(topup.user_id))
                .set(users::balance.eq(users::balance + topup.amount))
                .execute(conn)?;
            let confirmed = diesel::update(topups::table.find(topup.id))
                .set(topups::is_confirmed.eq(true))
                .get_result::<Topup>(conn)?;
            Ok(confirmed)
        })
    }
}
