use crate::db_utils::DbActor;
use crate::messages::reporting::{MovieTicketCount, TopMoviesMessage};
use crate::schema::{movies, schedules, transactions};
use actix::Handler;
use diesel::dsl::count;
use diesel::prelude::*;
use diesel::result::Error;

impl Handler<TopMoviesMessage> for DbActor {
    type Result = Result<Vec<MovieTicketCount>, Error>;

    fn handle(&mut self, msg: TopMoviesMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        // Ties on ticket count break towards the lower movie id.
        let rows: Vec<(i32, String, i64)> = movies::table
            .inner_join(schedules::table.inner_join(transactions::table))
            .group_by((movies::id, movies::name))
            .select((movies::id, movies::name, count(transactions::id)))
            .order((count(transactions::id).desc(), movies::id.asc()))
            .limit(msg.limit)
            .load(&mut conn)?;
        Ok(rows
            .into_iter()
            .map(|(id, movie, ticket_count)| MovieTicketCount {
                id,
                movie,
                ticket_count,
            })
            .collect())
    }
}
