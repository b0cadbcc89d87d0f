//! Google reCAPTCHA token verification.

use serde::Deserialize;

/// Default verification endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Errors from the verification call.
#[derive(Debug, thiserror::Error)]
pub enum RecaptchaError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The verification endpoint returned a non-2xx status code.
    #[error("reCAPTCHA API error ({status})")]
    ApiError { status: u16 },
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Verifies reCAPTCHA tokens against a configured secret.
#[derive(Clone)]
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    secret: String,
    verify_url: String,
}

impl RecaptchaVerifier {
    pub fn new(secret: String, verify_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), secret, verify_url)
    }

    pub fn with_client(client: reqwest::Client, secret: String, verify_url: String) -> Self {
        Self {
            client,
            secret,
            verify_url,
        }
    }

    /// Ask the verification endpoint whether `token` is valid.
    pub async fn try_verify(&self, token: &str) -> Result<bool, RecaptchaError> {
        let response = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecaptchaError::ApiError {
                status: status.as_u16(),
            });
        }

        let body: VerifyResponse = response.json().await?;
        if !body.success {
            tracing::debug!(error_codes = ?body.error_codes, "reCAPTCHA rejected token");
        }
        Ok(body.success)
    }

    /// Like [`try_verify`](Self::try_verify), but any transport or decoding
    /// failure counts as a failed verification.
    pub async fn verify(&self, token: &str) -> bool {
        match self.try_verify(token).await {
            Ok(success) => success,
            Err(e) => {
                tracing::error!(error = %e, "reCAPTCHA verification failed");
                false
            }
        }
    }
}
