use axum::http::HeaderValue;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub cors_origin: String,
    pub session_secret: String,
    pub ai_daily_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let cors_origin = validate_origin(
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        )?;

        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| "SESSION_SECRET must be set".to_string())?;

        if session_secret.len() < 16 {
            return Err("SESSION_SECRET must be at least 16 characters".to_string());
        }

        let ai_daily_limit = match env::var("AI_DAILY_LIMIT") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| format!("AI_DAILY_LIMIT must be a number, got '{}'", raw))?,
            Err(_) => 10,
        };

        Ok(Self {
            bind_addr,
            cors_origin,
            session_secret,
            ai_daily_limit,
        })
    }
}

/// Reject origins that cannot become a header value before the router is
/// built, so a bad CORS_ORIGIN fails through the config error path instead
/// of panicking at startup
fn validate_origin(origin: String) -> Result<String, String> {
    origin
        .parse::<HeaderValue>()
        .map_err(|_| format!("CORS_ORIGIN is not a valid header value: '{}'", origin))?;
    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_origin_passes_through() {
        assert_eq!(
            validate_origin("http://localhost:3000".to_string()).unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_malformed_origin_is_rejected() {
        assert!(validate_origin("http://bad\norigin".to_string()).is_err());
    }
}
