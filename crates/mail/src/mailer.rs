//! SMTP delivery.
//!
//! Configuration is loaded from environment variables; if `SMTP_HOST` is not
//! set, or `SMTP_USER` still holds the sample placeholder,
//! [`EmailConfig::from_env`] returns `None` and no mailer should be built.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use akrin_core::html::extract_text_from_html;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when neither `SMTP_FROM` nor `SMTP_USER` is set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@akrin.jp";

/// Display name on every outgoing message.
const FROM_DISPLAY_NAME: &str = "AKRIN Contact Form";

/// `SMTP_USER` value shipped in the sample environment file.
pub const PLACEHOLDER_SMTP_USER: &str = "your_email@example.com";

/// Domain used in generated `Message-ID` headers.
const MESSAGE_ID_DOMAIN: &str = "akrin.jp";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Required | Default                          |
    /// |-----------------|----------|----------------------------------|
    /// | `SMTP_HOST`     | yes      |                                  |
    /// | `SMTP_PORT`     | no       | `587`                            |
    /// | `SMTP_FROM`     | no       | `SMTP_USER`, else `noreply@akrin.jp` |
    /// | `SMTP_USER`     | no       |                                  |
    /// | `SMTP_PASSWORD` | no       |                                  |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let smtp_host = lookup("SMTP_HOST").filter(|h| !h.is_empty())?;
        let smtp_user = lookup("SMTP_USER").filter(|u| !u.is_empty());
        if smtp_user.as_deref() == Some(PLACEHOLDER_SMTP_USER) {
            return None;
        }

        Some(Self {
            smtp_host,
            smtp_port: lookup("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: lookup("SMTP_FROM")
                .or_else(|| smtp_user.clone())
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user,
            smtp_password: lookup("SMTP_PASSWORD"),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    /// Plain-text alternative; derived from `html` when absent.
    pub text: Option<String>,
    pub reply_to: Option<String>,
}

impl OutgoingEmail {
    pub fn plain_text(&self) -> String {
        self.text
            .clone()
            .unwrap_or_else(|| extract_text_from_html(&self.html))
    }
}

/// Delivers outgoing email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}

/// Sends email through an SMTP relay using STARTTLS.
pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a mailer; fails when the host or sender address is invalid.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let from = Mailbox::new(
            Some(FROM_DISPLAY_NAME.to_string()),
            config.from_address.parse()?,
        );

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            from,
            transport: transport_builder.build(),
        })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, EmailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject.clone())
            .message_id(Some(format!(
                "<{}@{MESSAGE_ID_DOMAIN}>",
                uuid::Uuid::now_v7()
            )));

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                email.plain_text(),
                email.html.clone(),
            ))
            .map_err(|e| EmailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let message = self.build_message(&email)?;
        self.transport.send(message).await?;
        tracing::info!(to = %email.to, subject = %email.subject, "Email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config() -> EmailConfig {
        EmailConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USER", "mailer@akrin.jp"),
        ]))
        .unwrap()
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            to: "sales@akrin.jp".into(),
            subject: "AKRIN Contact Form - Taro".into(),
            html: "<p>Hello &amp; welcome</p>".into(),
            text: None,
            reply_to: Some("taro@example.jp".into()),
        }
    }

    #[test]
    fn missing_host_means_unconfigured() {
        assert!(EmailConfig::from_lookup(lookup(&[("SMTP_USER", "a@b.c")])).is_none());
    }

    #[test]
    fn placeholder_user_means_unconfigured() {
        let vars = [("SMTP_HOST", "smtp.example.com"), ("SMTP_USER", PLACEHOLDER_SMTP_USER)];
        assert!(EmailConfig::from_lookup(lookup(&vars)).is_none());
    }

    #[test]
    fn from_defaults_to_user_then_noreply() {
        assert_eq!(config().from_address, "mailer@akrin.jp");
        assert_eq!(config().smtp_port, 587);

        let bare = EmailConfig::from_lookup(lookup(&[("SMTP_HOST", "h"), ("SMTP_PORT", "2525")])).unwrap();
        assert_eq!(bare.from_address, DEFAULT_FROM_ADDRESS);
        assert_eq!(bare.smtp_port, 2525);
    }

    #[test]
    fn plain_text_is_derived_from_html() {
        assert_eq!(email().plain_text(), "Hello & welcome");
        let explicit = OutgoingEmail {
            text: Some("custom".into()),
            ..email()
        };
        assert_eq!(explicit.plain_text(), "custom");
    }

    #[tokio::test]
    async fn builds_message_with_reply_to() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let message = mailer.build_message(&email()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Reply-To: taro@example.jp"));
        assert!(raw.contains("Subject: AKRIN Contact Form - Taro"));
        assert!(raw.contains("@akrin.jp>"));
    }

    #[tokio::test]
    async fn bad_recipient_is_an_address_error() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let bad = OutgoingEmail {
            to: "not-an-email".into(),
            ..email()
        };
        assert!(matches!(mailer.build_message(&bad), Err(EmailError::Address(_))));
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
