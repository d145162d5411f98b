use crate::schema::movies;
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of days after launch during which a movie stays bookable.
pub const ACTIVE_WINDOW_DAYS: i64 = 7;

#[derive(Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = movies)]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub launching: NaiveDate,
    pub category_id: Option<i32>,
    pub ticket_price: i32,
}

impl Movie {
    /// A movie is bookable from its launch date through the following
    /// seven days, inclusive. Dates before launch are not bookable.
    pub fn bookable_on(&self, date: NaiveDate) -> bool {
        date >= self.launching && (date - self.launching).num_days() <= ACTIVE_WINDOW_DAYS
    }
}

#[derive(Insertable, Serialize, Debug, Deserialize)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub name: String,
    pub launching: NaiveDate,
    pub category_id: Option<i32>,
    pub ticket_price: i32,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = movies)]
pub struct MovieChangeset {
    pub name: Option<String>,
    pub launching: Option<NaiveDate>,
    pub category_id: Option<i32>,
    pub ticket_price: Option<i32>,
}

impl MovieChangeset {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.launching.is_none()
            && self.category_id.is_none()
            && self.ticket_price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(launching: NaiveDate) -> Movie {
        Movie {
            id: 1,
            name: "Laskar Pelangi".to_string(),
            launching,
            category_id: None,
            ticket_price: 50,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bookable_on_launch_day() {
        let m = movie(date(2024, 6, 1));
        assert!(m.bookable_on(date(2024, 6, 1)));
    }

    #[test]
    fn bookable_on_last_window_day() {
        let m = movie(date(2024, 6, 1));
        assert!(m.bookable_on(date(2024, 6, 8)));
    }

    #[test]
    fn not_bookable_after_window_expires() {
        let m = movie(date(2024, 6, 1));
        assert!(!m.bookable_on(date(2024, 6, 9)));
        assert!(!m.bookable_on(date(2024, 6, 11)));
    }

    #[test]
    fn not_bookable_before_launch() {
        let m = movie(date(2024, 6, 10));
        assert!(!m.bookable_on(date(2024, 6, 9)));
    }
}
