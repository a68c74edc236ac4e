use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};
use url::Url;
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Public URL of the rendered site, used for canonical and OG links.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default)]
    pub sanity: SanityConfig,
}

/// Connection settings for the Sanity content lake.
///
/// A missing project id or dataset is not a startup error: the service keeps
/// serving the bundled fallback dataset and reports `warning` on health.
#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct SanityConfig {
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub dataset: Option<String>,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Write credential. Never needed on the read path.
    #[serde(default)]
    pub token: Option<Zeroizing<String>>,

    #[serde(default)]
    pub use_cdn: bool,

    /// Overrides `https://<project>.api.sanity.io`. Used by tests and proxies.
    #[serde(default)]
    pub api_host: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_step_ms")]
    pub retry_step_ms: u64,

    #[serde(default = "default_retry_cap_ms")]
    pub retry_cap_ms: u64,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Content".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_api_version() -> String {
    "2024-01-01".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_max_retries() -> u32 {
    3
}
fn default_retry_step_ms() -> u64 {
    1_000
}
fn default_retry_cap_ms() -> u64 {
    10_000
}

impl Default for SanityConfig {
    fn default() -> Self {
        SanityConfig {
            project_id: None,
            dataset: None,
            api_version: default_api_version(),
            token: None,
            use_cdn: false,
            api_host: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_step_ms: default_retry_step_ms(),
            retry_cap_ms: default_retry_cap_ms(),
        }
    }
}

impl SanityConfig {
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.project_id) && present(&self.dataset)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Linear backoff capped at `retry_cap_ms`: attempt 1 waits one step,
    /// attempt 2 two steps, and so on.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let millis = self.retry_step_ms.saturating_mul(attempt as u64).min(self.retry_cap_ms);
        Duration::from_millis(millis)
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // The front end's variable names are honoured when the APP_ ones are absent
        fill_from_env(&mut config.sanity.project_id, "SANITY_PROJECT_ID");
        fill_from_env(&mut config.sanity.dataset, "SANITY_DATASET");
        if config.sanity.token.is_none() {
            config.sanity.token = env::var("SANITY_PROJECT_TOKEN").ok().map(Zeroizing::new);
        }
        if let Ok(site_url) = env::var("SITE_URL") {
            config.site_url = site_url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if Url::parse(&self.site_url).is_err() {
            errors.push("SITE_URL must be an absolute URL");
        }
        if let Some(host) = &self.sanity.api_host {
            if Url::parse(host).is_err() {
                errors.push("SANITY__API_HOST must be an absolute URL");
            }
        }
        if self.sanity.timeout_secs == 0 {
            errors.push("SANITY__TIMEOUT_SECS must be greater than zero");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Site URL without a trailing slash, ready for joining paths.
    pub fn site_base(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

fn fill_from_env(current: &mut Option<String>, env_key: &str) {
    if current.as_deref().is_none_or(|v| v.trim().is_empty()) {
        *current = env::var(env_key).ok().filter(|v| !v.trim().is_empty());
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for Option<Zeroizing<String>> {
    fn redact(&self) -> &str {
        match self {
            Some(token) if !token.is_empty() => "[REDACTED]",
            _ => "[MISSING]",
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("site_url", &self.site_url)
            .field("sanity", &self.sanity)
            .finish()
    }
}

impl fmt::Debug for SanityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SanityConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("token", &self.token.redact())
            .field("use_cdn", &self.use_cdn)
            .field("api_host", &self.api_host)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
