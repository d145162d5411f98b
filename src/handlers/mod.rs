pub mod auth;
pub mod booking;
pub mod catalog;
pub mod reporting;
pub mod wallet;

use serde::Serialize;

/// JSON error body shared by every route.
#[derive(Serialize)]
pub struct RouteError {
    pub message: String,
    pub status: i32,
    pub variant: String,
}

impl RouteError {
    pub fn new(message: impl Into<String>, status: i32, variant: &str) -> Self {
        RouteError {
            message: message.into(),
            status,
            variant: variant.to_string(),
        }
    }

    pub fn internal() -> Self {
        RouteError::new("Something went wrong", 500, "InternalServerError")
    }
}
