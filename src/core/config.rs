use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub admin: AdminConfig,
    pub classifier: ClassifierConfig,
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Credentials for the staff-only routes (case management, dashboard, exports)
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    /// True when neither ADMIN_USERNAME nor ADMIN_PASSWORD was provided
    pub using_defaults: bool,
}

/// Remote report classifier settings.
///
/// When `api_key` is absent every report is classified by the offline
/// keyword classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ReportsConfig {
    pub tracking_id_prefix: String,
    pub allow_reopen: bool,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            classifier: ClassifierConfig::from_env()?,
            reports: ReportsConfig::from_env()?,
        })
    }
}

fn parse_bool(name: &str, default: bool) -> Result<bool, String> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(format!("{} must be a boolean, got '{}'", name, other)),
        },
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "CATEM Denuncias API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API del sistema de denuncias anónimas de CATEM".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl AdminConfig {
    const DEFAULT_USERNAME: &'static str = "admin";
    const DEFAULT_PASSWORD: &'static str = "admin";

    pub fn from_env() -> Result<Self, String> {
        let username = env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());
        let using_defaults = username.is_none() && password.is_none();

        Ok(Self {
            username: username.unwrap_or_else(|| Self::DEFAULT_USERNAME.to_string()),
            password: password.unwrap_or_else(|| Self::DEFAULT_PASSWORD.to_string()),
            using_defaults,
        })
    }

    /// Credentials in "username:password" format, as compared by the basic auth middleware
    pub fn credentials(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}

impl ClassifierConfig {
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("CLASSIFIER_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let base_url = env::var("CLASSIFIER_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let model = env::var("CLASSIFIER_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());

        let timeout_secs = env::var("CLASSIFIER_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "CLASSIFIER_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ReportsConfig {
    const DEFAULT_TRACKING_ID_PREFIX: &'static str = "CATEM";

    pub fn from_env() -> Result<Self, String> {
        let tracking_id_prefix = env::var("TRACKING_ID_PREFIX")
            .unwrap_or_else(|_| Self::DEFAULT_TRACKING_ID_PREFIX.to_string())
            .trim()
            .to_ascii_uppercase();

        if tracking_id_prefix.is_empty()
            || !tracking_id_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err("TRACKING_ID_PREFIX must be non-empty and alphanumeric".to_string());
        }

        Ok(Self {
            tracking_id_prefix,
            allow_reopen: parse_bool("ALLOW_REOPEN", true)?,
            seed_demo_data: parse_bool("SEED_DEMO_DATA", false)?,
        })
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            tracking_id_prefix: Self::DEFAULT_TRACKING_ID_PREFIX.to_string(),
            allow_reopen: true,
            seed_demo_data: false,
        }
    }
}
