use crate::db_utils::DbActor;
use crate::errors::catalog::{MovieError, ScheduleError};
use crate::messages::catalog::{
    CreateMovieMessage, CreateScheduleMessage, DeleteMovieMessage, DeleteScheduleMessage,
    ListActiveMoviesMessage, MovieListing, MovieSearchRow, ScheduleSlot, SearchMoviesMessage,
    UpdateMovieMessage, UpdateScheduleMessage,
};
use crate::models::{
    movie::{Movie, NewMovie, ACTIVE_WINDOW_DAYS},
    schedule::{NewSchedule, Schedule, ScheduleDetails},
};
use crate::schema::{categories, movies, schedules, theaters};
use actix::Handler;
use chrono::{Duration, NaiveTime};
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error};
use diesel::{prelude::*, PgConnection};

fn movie_exists(
    id: i32,
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
) -> Result<bool, Error> {
    diesel::select(diesel::dsl::exists(movies::table.find(id))).get_result(conn)
}

fn theater_exists(
    id: i32,
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
) -> Result<bool, Error> {
    diesel::select(diesel::dsl::exists(theaters::table.find(id))).get_result(conn)
}

fn schedule_details(
    schedule: Schedule,
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
) -> Result<ScheduleDetails, Error> {
    let movie = movies::table.find(schedule.movie_id).first::<Movie>(conn)?;
    Ok(ScheduleDetails {
        id: schedule.id,
        movie_id: schedule.movie_id,
        theater_id: schedule.theater_id,
        name: movie.name,
        ticket_price: movie.ticket_price,
        time: schedule.time,
    })
}

impl Handler<CreateMovieMessage> for DbActor {
    type Result = Result<Movie, MovieError>;

    fn handle(&mut self, msg: CreateMovieMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        let new_movie = NewMovie {
            name: msg.name,
            launching: msg.launching,
            category_id: msg.category_id,
            ticket_price: msg.ticket_price,
        };
        diesel::insert_into(movies::table)
            .values(&new_movie)
            .get_result::<Movie>(&mut conn)
            .map_err(|e| match e {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    MovieError::DuplicateName
                }
                other => MovieError::DieselError(other),
            })
    }
}

impl Handler<UpdateMovieMessage> for DbActor {
    type Result = Result<Movie, MovieError>;

    fn handle(&mut self, msg: UpdateMovieMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        if msg.changes.is_empty() {
            return movies::table
                .find(msg.id)
                .first::<Movie>(&mut conn)
                .map_err(|e| match e {
                    Error::NotFound => MovieError::NotFound,
                    other => MovieError::DieselError(other),
                });
        }
        diesel::update(movies::table.find(msg.id))
            .set(&msg.changes)
            .get_result::<Movie>(&mut conn)
            .map_err(|e| match e {
                Error::NotFound => MovieError::NotFound,
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    MovieError::DuplicateName
                }
                other => MovieError::DieselError(other),
            })
    }
}

impl Handler<DeleteMovieMessage> for DbActor {
    type Result = Result<(), MovieError>;

    fn handle(&mut self, msg: DeleteMovieMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        let deleted = diesel::delete(movies::table.find(msg.id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(MovieError::NotFound);
        }
        Ok(())
    }
}

impl Handler<CreateScheduleMessage> for DbActor {
    type Result = Result<ScheduleDetails, ScheduleError>;

    fn handle(&mut self, msg: CreateScheduleMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        if !movie_exists(msg.movie_id, &mut conn)? {
            return Err(ScheduleError::MovieNotFound);
        }
        if !theater_exists(msg.theater_id, &mut conn)? {
            return Err(ScheduleError::TheaterNotFound);
        }
        let new_schedule = NewSchedule {
            movie_id: msg.movie_id,
            theater_id: msg.theater_id,
            time: msg.time,
        };
        // Duplicate (movie_id, time) pairs are rejected by the unique
        // constraint, not by a pre-check read.
        let schedule = diesel::insert_into(schedules::table)
            .values(&new_schedule)
            .get_result::<Schedule>(&mut conn)
            .map_err(|e| match e {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ScheduleError::DuplicateSchedule
                }
                other => ScheduleError::DieselError(other),
            })?;
        Ok(schedule_details(schedule, &mut conn)?)
    }
}

impl Handler<UpdateScheduleMessage> for DbActor {
    type Result = Result<ScheduleDetails, ScheduleError>;

    fn handle(&mut self, msg: UpdateScheduleMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        if let Some(movie_id) = msg.changes.movie_id {
            if !movie_exists(movie_id, &mut conn)? {
                return Err(ScheduleError::MovieNotFound);
            }
        }
        if let Some(theater_id) = msg.changes.theater_id {
            if !theater_exists(theater_id, &mut conn)? {
                return Err(ScheduleError::TheaterNotFound);
            }
        }
        let schedule = if msg.changes.is_empty() {
            schedules::table
                .find(msg.id)
                .first::<Schedule>(&mut conn)
                .map_err(|e| match e {
                    Error::NotFound => ScheduleError::NotFound,
                    other => ScheduleError::DieselError(other),
                })?
        } else {
            diesel::update(schedules::table.find(msg.id))
                .set(&msg.changes)
                .get_result::<Schedule>(&mut conn)
                .map_err(|e| match e {
                    Error::NotFound => ScheduleError::NotFound,
                    Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ScheduleError::DuplicateSchedule
                    }
                    other => ScheduleError::DieselError(other),
                })?
        };
        Ok(schedule_details(schedule, &mut conn)?)
    }
}

impl Handler<DeleteScheduleMessage> for DbActor {
    type Result = Result<(), ScheduleError>;

    fn handle(&mut self, msg: DeleteScheduleMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        let deleted = diesel::delete(schedules::table.find(msg.id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(ScheduleError::NotFound);
        }
        Ok(())
    }
}

impl Handler<ListActiveMoviesMessage> for DbActor {
    type Result = Result<Vec<MovieListing>, Error>;

    fn handle(&mut self, msg: ListActiveMoviesMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        let window_start = msg.play_date - Duration::days(ACTIVE_WINDOW_DAYS);
        let active: Vec<(Movie, Option<String>)> = movies::table
            .left_join(categories::table)
            .filter(movies::launching.ge(window_start))
            .filter(movies::launching.le(msg.play_date))
            .order(movies::id.asc())
            .select((Movie::as_select(), categories::name.nullable()))
            .load(&mut conn)?;

        let mut listings = Vec::with_capacity(active.len());
        for (movie, category) in active {
            let slots: Vec<(NaiveTime, i32)> = schedules::table
                .inner_join(theaters::table)
                .filter(schedules::movie_id.eq(movie.id))
                .order(schedules::id.asc())
                .select((schedules::time, theaters::room))
                .load(&mut conn)?;
            listings.push(MovieListing {
                id: movie.id,
                name: movie.name,
                category,
                ticket_price: movie.ticket_price,
                launching: movie.launching,
                schedules: slots
                    .into_iter()
                    .map(|(time, theater)| ScheduleSlot { time, theater })
                    .collect(),
            });
        }
        Ok(listings)
    }
}

impl Handler<SearchMoviesMessage> for DbActor {
    type Result = Result<Vec<MovieSearchRow>, Error>;

    fn handle(&mut self, msg: SearchMoviesMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        let pattern = format!("%{}%", msg.query);

        let by_name: Vec<(Movie, Option<String>)> = movies::table
            .left_join(categories::table)
            .filter(movies::name.ilike(pattern.as_str()))
            .select((Movie::as_select(), categories::name.nullable()))
            .load(&mut conn)?;
        let by_category: Vec<(Movie, Option<String>)> = movies::table
            .inner_join(categories::table)
            .filter(categories::name.ilike(pattern.as_str()))
            .select((Movie::as_select(), categories::name.nullable()))
            .load(&mut conn)?;

        // Union of both matches, deduplicated by movie id, ascending.
        let mut rows: Vec<(Movie, Option<String>)> =
            by_name.into_iter().chain(by_category).collect();
        rows.sort_by_key(|(movie, _)| movie.id);
        rows.dedup_by_key(|(movie, _)| movie.id);

        Ok(rows
            .into_iter()
            .map(|(movie, category)| MovieSearchRow {
                id: movie.id,
                name: movie.name,
                launching: movie.launching,
                category,
            })
            .collect())
    }
}
