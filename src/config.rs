use std::env;

/// Everything the server needs from the environment, resolved once in
/// `main` and carried in the application state.
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub booking: BookingConfig,
}

#[derive(Clone)]
pub struct BookingConfig {
    /// When false, `/buy/ticket` ignores any caller-supplied date and
    /// always books for today.
    pub allow_client_date: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL cannot be empty (env)");
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let allow_client_date = env::var("BOOKING_CLIENT_DATE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        AppConfig {
            database_url,
            bind_addr,
            booking: BookingConfig { allow_client_date },
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn recognizes_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" Yes "));
    }

    #[test]
    fn everything_else_is_false() {
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("maybe"));
    }
}
