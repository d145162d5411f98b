use crate::schema::schedules;
use chrono::NaiveTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Queryable, Selectable, Clone)]
#[diesel(table_name = schedules)]
pub struct Schedule {
    pub id: i32,
    pub movie_id: i32,
    pub theater_id: i32,
    pub time: NaiveTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schedules)]
pub struct NewSchedule {
    pub movie_id: i32,
    pub theater_id: i32,
    pub time: NaiveTime,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = schedules)]
pub struct ScheduleChangeset {
    pub movie_id: Option<i32>,
    pub theater_id: Option<i32>,
    pub time: Option<NaiveTime>,
}

impl ScheduleChangeset {
    pub fn is_empty(&self) -> bool {
        self.movie_id.is_none() && self.theater_id.is_none() && self.time.is_none()
    }
}

/// A schedule joined with its movie, as returned by the admin endpoints.
#[derive(Serialize)]
pub struct ScheduleDetails {
    pub id: i32,
    pub movie_id: i32,
    pub theater_id: i32,
    pub name: String,
    pub ticket_price: i32,
    #[serde(with = "showtime_format")]
    pub time: NaiveTime,
}

/// Showtimes travel as "HH:MM" strings over the wire.
pub mod showtime_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }

    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(raw, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(raw, FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::showtime_format;

    #[test]
    fn parses_hour_minute() {
        let t = showtime_format::parse("14:30").unwrap();
        assert_eq!(t.format("%H:%M:%S").to_string(), "14:30:00");
    }

    #[test]
    fn parses_hour_minute_second() {
        let t = showtime_format::parse("09:15:30").unwrap();
        assert_eq!(t.format("%H:%M:%S").to_string(), "09:15:30");
    }

    #[test]
    fn rejects_garbage() {
        assert!(showtime_format::parse("half past nine").is_err());
        assert!(showtime_format::parse("25:00").is_err());
    }
}
