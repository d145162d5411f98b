use crate::db_utils::DbActor;
use crate::errors::booking::BuyTicketError;
use crate::messages::booking::BuyTicketMessage;
use crate::models::{
    movie::Movie,
    schedule::Schedule,
    theater::Theater,
    transaction::{NewTransaction, TicketReceipt, Transaction},
    user::User,
};
use crate::schema::{movies, schedules, theaters, transactions, users};
use actix::Handler;
use diesel::prelude::*;

impl Handler<BuyTicketMessage> for DbActor {
    type Result = Result<TicketReceipt, BuyTicketError>;

    fn handle(&mut self, msg: BuyTicketMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");

        // Seat counting and balance debiting must not interleave between
        // concurrent buyers: the schedule row lock serializes all purchases
        // for a schedule, the user row lock serializes the debit.
        conn.transaction::<TicketReceipt, BuyTicketError, _>(|conn| {
            let schedule = schedules::table
                .find(msg.schedule_id)
                .for_update()
                .first::<Schedule>(conn)
                .optional()?
                .ok_or(BuyTicketError::ScheduleNotFound)?;

            let movie = movies::table.find(schedule.movie_id).first::<Movie>(conn)?;
            if !movie.bookable_on(msg.date) {
                return Err(BuyTicketError::NotBookable);
            }

            let theater = theaters::table
                .find(schedule.theater_id)
                .first::<Theater>(conn)?;
            let sold: i64 = transactions::table
                .filter(transactions::schedule_id.eq(schedule.id))
                .filter(transactions::date.eq(msg.date))
                .count()
                .get_result(conn)?;
            if sold >= theater.total_seat as i64 {
                return Err(BuyTicketError::SoldOut);
            }

            let buyer = users::table
                .find(msg.user_id)
                .for_update()
                .first::<User>(conn)?;
            if buyer.balance < movie.ticket_price {
                return Err(BuyTicketError::InsufficientBalance);
            }

            let remaining = buyer.balance - movie.ticket_price;
            diesel::update(users::table.find(buyer.id))
                .set(users::balance.eq(remaining))
                .execute(conn)?;
            let ticket = diesel::insert_into(transactions::table)
                .values(&NewTransaction {
                    user_id: buyer.id,
                    schedule_id: schedule.id,
                    date: msg.date,
                })
                .get_result::<Transaction>(conn)?;

            Ok(TicketReceipt {
                transaction_id: ticket.id,
                schedule_id: ticket.schedule_id,
                date: ticket.date,
                remaining_balance: remaining,
            })
        })
    }
}
