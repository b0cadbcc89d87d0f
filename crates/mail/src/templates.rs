//! Notification messages for the contact, booking and lead forms.
//!
//! All user-supplied values are HTML-escaped before interpolation.

use chrono::NaiveDate;

use akrin_core::forms::{BookingForm, ContactForm, LeadForm};
use akrin_core::html::escape;

use crate::mailer::OutgoingEmail;

const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";

/// Human-readable name for a booking form service key.
pub fn service_display_name(key: &str) -> &str {
    match key {
        "managed-it" => "Managed IT Services",
        "cyber-security" => "Cyber Security",
        "cloud-services" => "Cloud Services",
        "it-consulting" => "IT Consulting",
        "other" => "Other",
        _ => key,
    }
}

/// Format a `YYYY-MM-DD` preferred date as `Friday, January 17, 2025`;
/// anything else is shown as sent.
pub fn format_preferred_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn row(label: &str, value: &str) -> String {
    format!(
        "<tr><td style=\"padding:8px 16px;font-weight:600\">{label}</td>\
         <td style=\"padding:8px 16px\">{value}</td></tr>"
    )
}

fn wrap(title: &str, rows: &[String], footer: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\"><title>{title}</title></head>\
         <body style=\"font-family:sans-serif;color:#1a1a1a\">\
         <h2 style=\"color:#7A28FF\">{title}</h2>\
         <table cellpadding=\"0\" cellspacing=\"0\">{}</table>{footer}\
         <hr><p><small>This is an automated notification from the AKRIN website.</small></p>\
         </body></html>",
        rows.concat()
    )
}

fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>")
}

pub fn contact_email(form: &ContactForm, timestamp: &str, to: &str) -> OutgoingEmail {
    let name = escape(&form.name);
    let email = escape(&form.email);
    let html = wrap(
        "New Contact Form Submission - AKRIN",
        &[
            row("Name", &name),
            row("Email", &format!("<a href=\"mailto:{email}\">{email}</a>")),
            row("Submitted", &escape(timestamp)),
        ],
        &format!("<h3>Message</h3><p>{}</p>", multiline(&form.message)),
    );
    let text = format!(
        "NEW CONTACT FORM SUBMISSION\n\n\
         Name:           {}\n\
         Email:          {}\n\
         Submitted:      {timestamp}\n\n\
         MESSAGE\n{}\n\n\
         Reply: {}\n",
        form.name, form.email, form.message, form.email
    );

    OutgoingEmail {
        to: to.to_string(),
        subject: format!("AKRIN Contact Form - {}", form.name),
        html,
        text: Some(text),
        reply_to: Some(form.email.clone()),
    }
}

pub fn booking_email(form: &BookingForm, timestamp: &str, to: &str) -> OutgoingEmail {
    let email = escape(&form.email);
    let phone = escape(&form.phone);
    let mut rows = vec![
        row("Name", &escape(&format!("{} {}", form.first_name, form.last_name))),
        row("Email", &format!("<a href=\"mailto:{email}\">{email}</a>")),
        row("Phone", &format!("<a href=\"tel:{phone}\">{phone}</a>")),
        row("Service", &escape(service_display_name(&form.service))),
        row("Preferred Date", &escape(&format_preferred_date(&form.preferred_date))),
    ];
    if let Some(message) = form.message.as_deref().filter(|m| !m.is_empty()) {
        rows.push(row("Message", &multiline(message)));
    }
    rows.push(row("Submitted", &escape(timestamp)));

    OutgoingEmail {
        to: to.to_string(),
        subject: format!("New Consultation Booking - {} {}", form.first_name, form.last_name),
        html: wrap("New Consultation Booking - AKRIN", &rows, ""),
        text: None,
        reply_to: Some(form.email.clone()),
    }
}

pub fn lead_email(form: &LeadForm, score: u32, to: &str) -> OutgoingEmail {
    let opt = |v: &Option<String>, fallback: &str| {
        escape(v.as_deref().filter(|s| !s.is_empty()).unwrap_or(fallback))
    };
    let rows = [
        row("Name", &escape(&form.name)),
        row("Company", &escape(&form.company)),
        row("Email", &escape(&form.email)),
        row("Phone", &opt(&form.phone, NOT_PROVIDED)),
        row("Role", &opt(&form.role, NOT_SPECIFIED)),
        row("Timeline", &opt(&form.timeline, NOT_SPECIFIED)),
        row("Challenges", &opt(&form.challenges, NOT_PROVIDED)),
        row("Lead Score", &format!("{score}/100")),
        row("Source", &escape(form.source_or_default())),
        row("Session ID", &opt(&form.session_id, NOT_PROVIDED)),
    ];

    OutgoingEmail {
        to: to.to_string(),
        subject: format!("New Lead: {} - {}", form.company, form.name),
        html: wrap("New Lead from Website", &rows, ""),
        text: None,
        reply_to: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_subject_and_reply_to() {
        let form = ContactForm {
            name: "Taro <b>".into(),
            email: "taro@example.jp".into(),
            message: "line one\nline two".into(),
            recaptcha_token: None,
        };
        let email = contact_email(&form, "Friday, January 17, 2025 at 3:04 PM", "sales@akrin.jp");
        assert_eq!(email.subject, "AKRIN Contact Form - Taro <b>");
        assert_eq!(email.reply_to.as_deref(), Some("taro@example.jp"));
        assert!(email.html.contains("Taro &lt;b&gt;"));
        assert!(email.html.contains("line one<br>line two"));
        assert!(email.text.unwrap().contains("Submitted:      Friday"));
    }

    #[test]
    fn booking_formats_service_and_date() {
        let form = BookingForm {
            first_name: "Hanako".into(),
            last_name: "Sato".into(),
            email: "hanako@example.jp".into(),
            phone: "03-1234-5678".into(),
            preferred_date: "2025-02-03".into(),
            service: "cyber-security".into(),
            message: None,
            recaptcha_token: None,
        };
        let email = booking_email(&form, "now", "sales@akrin.jp");
        assert_eq!(email.subject, "New Consultation Booking - Hanako Sato");
        assert!(email.html.contains("Cyber Security"));
        assert!(email.html.contains("Monday, February 3, 2025"));
        assert!(!email.html.contains(">Message<"));
    }

    #[test]
    fn unknown_service_and_date_pass_through() {
        assert_eq!(service_display_name("wifi"), "wifi");
        assert_eq!(format_preferred_date("next week"), "next week");
        assert_eq!(format_preferred_date("2025-02-03T09:00:00Z"), "Monday, February 3, 2025");
    }

    #[test]
    fn lead_notification_lists_defaults() {
        let form = LeadForm {
            name: "Ken".into(),
            email: "ken@example.jp".into(),
            company: "Acme KK".into(),
            ..Default::default()
        };
        let email = lead_email(&form, 10, "biz@akrin.jp");
        assert_eq!(email.subject, "New Lead: Acme KK - Ken");
        assert!(email.html.contains("10/100"));
        assert!(email.html.contains("website_form"));
        assert!(email.html.contains(NOT_SPECIFIED));
        assert!(email.reply_to.is_none());
    }
}
