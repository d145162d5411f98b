use actix::Message;
use diesel::result::Error as DieselError;
use serde::Serialize;

#[derive(Message)]
#[rtype(result = "Result<Vec<MovieTicketCount>,DieselError>")]
pub struct TopMoviesMessage {
    pub limit: i64,
}

#[derive(Serialize)]
pub struct MovieTicketCount {
    pub id: i32,
    pub movie: String,
    pub ticket_count: i64,
}
