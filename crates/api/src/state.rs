use std::sync::Arc;

use akrin_clients::{DeeplClient, RecaptchaVerifier, SerankingClient};
use akrin_core::forms::recaptcha_secret_configured;
use akrin_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outgoing mail; `None` when SMTP is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
    /// reCAPTCHA verifier; `None` when no real secret is configured.
    pub recaptcha: Option<Arc<RecaptchaVerifier>>,
    /// DeepL client; `None` when no API key is configured.
    pub deepl: Option<Arc<DeeplClient>>,
    /// SEranking client (reports `NotConfigured` without a key).
    pub seranking: Arc<SerankingClient>,
}

impl AppState {
    /// Build the third-party clients described by `config`.
    pub fn new(config: ServerConfig, mailer: Option<Arc<dyn Mailer>>) -> Self {
        let recaptcha = recaptcha_secret_configured(config.recaptcha_secret.as_deref())
            .then(|| config.recaptcha_secret.clone())
            .flatten()
            .map(|secret| {
                Arc::new(RecaptchaVerifier::new(
                    secret,
                    config.recaptcha_verify_url.clone(),
                ))
            });

        let deepl = config
            .deepl_api_key
            .clone()
            .map(|key| Arc::new(DeeplClient::new(key, config.deepl_api_url.clone())));

        let seranking = Arc::new(SerankingClient::new(
            config.seranking_api_key.clone(),
            config.seranking_api_base_url.clone(),
        ));

        Self {
            config: Arc::new(config),
            mailer,
            recaptcha,
            deepl,
            seranking,
        }
    }
}
