use std::path::PathBuf;

use akrin_core::site::DEFAULT_BASE_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Third-party
/// integrations stay disabled until their keys are set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Time allowed for in-flight requests to finish after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Public site origin used for canonical URLs, sitemap and robots.
    pub site_base_url: String,
    /// Recipient of contact and booking notifications.
    pub sales_email: String,
    /// Recipient of lead notifications; falls back to `sales_email`.
    pub business_email: String,
    /// Scheduling link returned by `POST /api/schedule`.
    pub calendly_link: String,
    pub recaptcha_secret: Option<String>,
    pub recaptcha_verify_url: String,
    pub deepl_api_key: Option<String>,
    pub deepl_api_url: String,
    pub seranking_api_key: Option<String>,
    pub seranking_api_base_url: String,
    /// Domain analysed by the SEO admin routes.
    pub seo_domain: String,
    /// Directories holding the English and Japanese case-study MDX files.
    pub case_studies_en_dir: PathBuf,
    pub case_studies_ja_dir: PathBuf,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                     |
    /// |--------------------------|---------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                   |
    /// | `PORT`                   | `3000`                                      |
    /// | `CORS_ORIGINS`           | `http://localhost:3000`                     |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                        |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                                        |
    /// | `SITE_BASE_URL`          | `https://akrin.jp`                          |
    /// | `SALES_EMAIL`            | `support@akrin.jp`                          |
    /// | `BUSINESS_EMAIL`         | `SALES_EMAIL`                               |
    /// | `CALENDLY_LINK`          | `https://calendly.com/akrin-sales`          |
    /// | `RECAPTCHA_SECRET_KEY`   | unset (verification skipped)                |
    /// | `RECAPTCHA_VERIFY_URL`   | Google `siteverify` endpoint                |
    /// | `DEEPL_API_KEY`          | unset (translation disabled)                |
    /// | `DEEPL_API_URL`          | `https://api-free.deepl.com/v2/translate`   |
    /// | `SERANKING_API_KEY`      | unset (SEO data disabled)                   |
    /// | `SERANKING_API_BASE_URL` | `https://api.seranking.com`                 |
    /// | `SEO_DOMAIN`             | `akrin.jp`                                  |
    /// | `CASE_STUDIES_EN_DIR`    | `english-case-studies-mdx`                  |
    /// | `CASE_STUDIES_JA_DIR`    | `japanese-case-studies-mdx`                 |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = env_or("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let sales_email = env_or("SALES_EMAIL", "support@akrin.jp");
        let business_email = env_opt("BUSINESS_EMAIL").unwrap_or_else(|| sales_email.clone());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            site_base_url: env_or("SITE_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            sales_email,
            business_email,
            calendly_link: env_or("CALENDLY_LINK", "https://calendly.com/akrin-sales"),
            recaptcha_secret: env_opt("RECAPTCHA_SECRET_KEY"),
            recaptcha_verify_url: env_or(
                "RECAPTCHA_VERIFY_URL",
                akrin_clients::recaptcha::DEFAULT_VERIFY_URL,
            ),
            deepl_api_key: env_opt("DEEPL_API_KEY"),
            deepl_api_url: env_or("DEEPL_API_URL", akrin_clients::deepl::DEFAULT_API_URL),
            seranking_api_key: env_opt("SERANKING_API_KEY"),
            seranking_api_base_url: env_or(
                "SERANKING_API_BASE_URL",
                akrin_clients::seranking::DEFAULT_BASE_URL,
            ),
            seo_domain: env_or("SEO_DOMAIN", "akrin.jp"),
            case_studies_en_dir: env_or("CASE_STUDIES_EN_DIR", "english-case-studies-mdx").into(),
            case_studies_ja_dir: env_or("CASE_STUDIES_JA_DIR", "japanese-case-studies-mdx").into(),
        }
    }
}
