//! HTTP clients for the third-party services used by the site backend.

pub mod deepl;
pub mod recaptcha;
pub mod seranking;

pub use deepl::{DeeplClient, TranslateError, Translation};
pub use recaptcha::{RecaptchaError, RecaptchaVerifier};
pub use seranking::{SerankingClient, SerankingError};
