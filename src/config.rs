use std::env;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/user_management";
const DEFAULT_DATABASE_NAME: &str = "user_management";
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://127.0.0.1:5173,http://localhost:3000,http://127.0.0.1:3000";

/// Runtime configuration, read from the environment (after `.env` is loaded)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    /// Where the UI sends its API calls
    pub api_base_url: String,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port: u16 = port
            .parse()
            .map_err(|e| format!("Invalid PORT '{}': {}", port, e))?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let database_name = database_name_from_uri(&database_url);

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        let allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let timeout = env::var("REQUEST_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string());
        let timeout: u64 = timeout
            .parse()
            .map_err(|e| format!("Invalid REQUEST_TIMEOUT_SECS '{}': {}", timeout, e))?;

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            allowed_origins,
            request_timeout: Duration::from_secs(timeout),
        })
    }
}

/// Extracts the database name from the URI path, e.g.
/// `mongodb://host:27017/users?retryWrites=true` -> `users`
pub fn database_name_from_uri(uri: &str) -> String {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);

    without_scheme
        .split_once('/')
        .map(|(_, path)| path.split('?').next().unwrap_or(""))
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DATABASE_NAME)
        .to_string()
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
