//! DeepL translation client.

use serde::{Deserialize, Serialize};

/// Default endpoint (DeepL free tier).
pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

/// Errors from the DeepL API layer.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// DeepL returned a non-2xx status code.
    #[error("DeepL API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The response contained no translation.
    #[error("DeepL returned no translations")]
    Empty,
}

/// A translated text and the language DeepL detected for the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
    pub detected_source_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslationItem>,
}

#[derive(Debug, Deserialize)]
struct TranslationItem {
    text: String,
    #[serde(default)]
    detected_source_language: String,
}

/// HTTP client for the DeepL `translate` endpoint.
#[derive(Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    auth_key: String,
    api_url: String,
}

impl DeeplClient {
    pub fn new(auth_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            auth_key,
            api_url,
        }
    }

    /// Translate `text` into `target_lang`.
    ///
    /// Language codes are upper-cased before sending; `source_lang` is
    /// omitted when absent or empty so DeepL detects it.
    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<Translation, TranslateError> {
        let target_lang = target_lang.to_uppercase();
        let mut params = vec![
            ("auth_key", self.auth_key.clone()),
            ("text", text.to_string()),
            ("target_lang", target_lang),
        ];
        if let Some(source) = source_lang.filter(|s| !s.is_empty()) {
            params.push(("source_lang", source.to_uppercase()));
        }

        let response = self.client.post(&self.api_url).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TranslateError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body: TranslateResponse = response.json().await?;
        let first = body
            .translations
            .into_iter()
            .next()
            .ok_or(TranslateError::Empty)?;

        Ok(Translation {
            translated_text: first.text,
            detected_source_lang: first.detected_source_language,
        })
    }
}
