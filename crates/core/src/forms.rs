//! Request payloads for the public form endpoints, lead scoring and the
//! submission timestamp format.
//!
//! Every text field defaults to empty so a missing field surfaces as a
//! validation error rather than a body rejection.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// reCAPTCHA secret shipped in the sample environment file.
pub const PLACEHOLDER_RECAPTCHA_SECRET: &str = "your-secret-key";

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Roles that signal a decision maker.
const DECISION_MAKER_ROLES: &[&str] = &["ceo", "cto", "it_manager"];

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    pub recaptcha_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Preferred date is required"))]
    pub preferred_date: String,
    #[validate(length(min = 1, message = "Service is required"))]
    pub service: String,
    pub message: Option<String>,
    pub recaptcha_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadForm {
    #[validate(length(min = 1, message = "Name, email, and company are required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Name, email, and company are required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name, email, and company are required"))]
    pub company: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub challenges: Option<String>,
    pub timeline: Option<String>,
    pub session_id: Option<String>,
    pub source: Option<String>,
}

impl LeadForm {
    /// Source recorded when the client does not send one.
    pub fn source_or_default(&self) -> &str {
        self.source.as_deref().filter(|s| !s.is_empty()).unwrap_or("website_form")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub session_id: Option<String>,
    pub scheduling_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub text: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub target_lang: String,
    pub source_lang: Option<String>,
}

/// Score a lead from 0 to 100.
///
/// ```
/// use akrin_core::forms::{lead_score, LeadForm};
///
/// let lead = LeadForm {
///     company: "Acme".into(),
///     role: Some("cto".into()),
///     timeline: Some("immediate".into()),
///     ..Default::default()
/// };
/// assert_eq!(lead_score(&lead), 45);
/// ```
pub fn lead_score(lead: &LeadForm) -> u32 {
    let mut score = 0;
    if !lead.company.is_empty() {
        score += 10;
    }
    if lead
        .role
        .as_deref()
        .is_some_and(|role| DECISION_MAKER_ROLES.contains(&role))
    {
        score += 15;
    }
    score += match lead.timeline.as_deref() {
        Some("immediate") => 20,
        Some("quarter") => 15,
        Some("half_year") => 10,
        Some("year") => 5,
        _ => 0,
    };
    if lead.challenges.as_deref().is_some_and(|c| c.chars().count() > 20) {
        score += 10;
    }
    score.min(100)
}

/// Whether a configured reCAPTCHA secret is real.
pub fn recaptcha_secret_configured(secret: Option<&str>) -> bool {
    secret.is_some_and(|s| !s.is_empty() && s != PLACEHOLDER_RECAPTCHA_SECRET)
}

/// Submission time as shown in notification emails, in Japan time:
/// `Friday, January 17, 2025 at 3:04 PM`.
pub fn tokyo_timestamp(now: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(JST_OFFSET_SECS) {
        Some(jst) => now
            .with_timezone(&jst)
            .format("%A, %B %-d, %Y at %-I:%M %p")
            .to_string(),
        None => now.format("%A, %B %-d, %Y at %-I:%M %p UTC").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lead() -> LeadForm {
        LeadForm {
            name: "Taro".into(),
            email: "taro@example.jp".into(),
            company: "Acme KK".into(),
            ..Default::default()
        }
    }

    #[test]
    fn company_alone_scores_ten() {
        assert_eq!(lead_score(&lead()), 10);
    }

    #[test]
    fn role_must_be_a_decision_maker() {
        let mut l = lead();
        l.role = Some("it_manager".into());
        assert_eq!(lead_score(&l), 25);
        l.role = Some("intern".into());
        assert_eq!(lead_score(&l), 10);
    }

    #[test]
    fn timeline_table() {
        for (timeline, expected) in [
            ("immediate", 30),
            ("quarter", 25),
            ("half_year", 20),
            ("year", 15),
            ("someday", 10),
        ] {
            let mut l = lead();
            l.timeline = Some(timeline.into());
            assert_eq!(lead_score(&l), expected, "{timeline}");
        }
    }

    #[test]
    fn challenges_need_more_than_twenty_chars() {
        let mut l = lead();
        l.challenges = Some("x".repeat(20));
        assert_eq!(lead_score(&l), 10);
        l.challenges = Some("x".repeat(21));
        assert_eq!(lead_score(&l), 20);
    }

    #[test]
    fn maximum_score() {
        let l = LeadForm {
            role: Some("ceo".into()),
            timeline: Some("immediate".into()),
            challenges: Some("Our office network drops every afternoon".into()),
            ..lead()
        };
        assert_eq!(lead_score(&l), 55);
    }

    #[test]
    fn lead_requires_name_email_company() {
        assert!(lead().validate().is_ok());
        let missing = LeadForm {
            company: String::new(),
            ..lead()
        };
        assert!(missing.validate().is_err());
        assert_eq!(lead().source_or_default(), "website_form");
    }

    #[test]
    fn contact_rejects_bad_email() {
        let form = ContactForm {
            name: "A".into(),
            email: "not-an-email".into(),
            message: "hello".into(),
            recaptcha_token: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let form: TranslateRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(form.target_lang, "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn placeholder_secret_is_unconfigured() {
        assert!(!recaptcha_secret_configured(None));
        assert!(!recaptcha_secret_configured(Some("")));
        assert!(!recaptcha_secret_configured(Some(PLACEHOLDER_RECAPTCHA_SECRET)));
        assert!(recaptcha_secret_configured(Some("6Lc-real")));
    }

    #[test]
    fn timestamp_is_in_japan_time() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 17, 6, 4, 0).unwrap();
        assert_eq!(tokyo_timestamp(utc), "Friday, January 17, 2025 at 3:04 PM");
    }
}
