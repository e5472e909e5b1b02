use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware so a browser front end can drive the session
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:8080")
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://localhost:8080".to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_and_trim_origins() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test,,"),
            vec!["http://a.test", "http://b.test"]
        );
    }
}
