//! Outbound email for form notifications.
//!
//! [`Mailer`] is the seam used by the HTTP layer; [`SmtpMailer`] is the
//! production implementation over `lettre`. Message bodies are built by the
//! functions in [`templates`].

pub mod mailer;
pub mod templates;

pub use mailer::{EmailConfig, EmailError, Mailer, OutgoingEmail, SmtpMailer};
