//! Handlers for the public forms.
//!
//! reCAPTCHA is checked only when the client sends a token and a secret is
//! configured. Notification email is best-effort: delivery failures are
//! logged and the submission still succeeds.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use akrin_clients::Translation;
use akrin_core::forms::{
    lead_score, tokyo_timestamp, BookingForm, ContactForm, LeadForm, ScheduleRequest,
    TranslateRequest,
};
use akrin_mail::templates::{booking_email, contact_email, lead_email};
use akrin_mail::OutgoingEmail;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const INVALID_RECAPTCHA: &str = "Invalid reCAPTCHA. Please try again.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub success: bool,
    pub message: &'static str,
    pub lead_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub success: bool,
    pub message: &'static str,
    pub calendly_link: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject the request when a supplied token fails verification.
async fn check_recaptcha(state: &AppState, token: Option<&str>) -> AppResult<()> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(());
    };
    let Some(verifier) = &state.recaptcha else {
        tracing::warn!("reCAPTCHA verification skipped - not configured");
        return Ok(());
    };
    if verifier.verify(token).await {
        Ok(())
    } else {
        Err(AppError::BadRequest(INVALID_RECAPTCHA.to_string()))
    }
}

/// Send a notification if SMTP is configured. Returns whether it was sent.
async fn deliver(state: &AppState, email: OutgoingEmail) -> bool {
    let Some(mailer) = &state.mailer else {
        tracing::info!(to = %email.to, subject = %email.subject, "Email skipped - SMTP not configured");
        return false;
    };
    match mailer.send(email).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "Email sending failed");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<MessageResponse>> {
    form.validate()?;
    check_recaptcha(&state, form.recaptcha_token.as_deref()).await?;

    let timestamp = tokyo_timestamp(Utc::now());
    let email_sent = deliver(
        &state,
        contact_email(&form, &timestamp, &state.config.sales_email),
    )
    .await;

    tracing::info!(name = %form.name, email = %form.email, email_sent, "Contact form submission");

    Ok(Json(MessageResponse {
        message: "Thank you for your message. We will get back to you soon!",
    }))
}

/// POST /api/book-reservation
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(form): Json<BookingForm>,
) -> AppResult<Json<MessageResponse>> {
    form.validate()?;
    check_recaptcha(&state, form.recaptcha_token.as_deref()).await?;

    let timestamp = tokyo_timestamp(Utc::now());
    let email_sent = deliver(
        &state,
        booking_email(&form, &timestamp, &state.config.sales_email),
    )
    .await;

    tracing::info!(
        first_name = %form.first_name,
        last_name = %form.last_name,
        email = %form.email,
        service = %form.service,
        preferred_date = %form.preferred_date,
        email_sent,
        "Booking reservation",
    );

    Ok(Json(MessageResponse {
        message: "Your consultation has been booked successfully! We will contact you shortly to confirm.",
    }))
}

/// POST /api/leads
pub async fn capture_lead(
    State(state): State<AppState>,
    Json(form): Json<LeadForm>,
) -> AppResult<Json<LeadResponse>> {
    form.validate()?;

    let lead_id = Uuid::now_v7();
    let score = lead_score(&form);
    let email_sent = deliver(
        &state,
        lead_email(&form, score, &state.config.business_email),
    )
    .await;

    tracing::info!(
        %lead_id,
        company = %form.company,
        score,
        source = %form.source_or_default(),
        email_sent,
        "Lead captured",
    );

    Ok(Json(LeadResponse {
        success: true,
        message: "Lead captured successfully",
        lead_id,
    }))
}

/// POST /api/schedule
pub async fn track_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Json<ScheduleResponse> {
    tracing::info!(
        session_id = ?request.session_id,
        scheduling_data = ?request.scheduling_data,
        "Scheduling attempt",
    );

    Json(ScheduleResponse {
        success: true,
        message: "Scheduling tracked successfully",
        calendly_link: state.config.calendly_link.clone(),
    })
}

/// POST /api/translate
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> AppResult<Json<Translation>> {
    request.validate()?;
    let deepl = state
        .deepl
        .as_ref()
        .ok_or(AppError::NotConfigured("DeepL API key not configured"))?;

    let translation = deepl
        .translate(
            &request.text,
            &request.target_lang,
            request.source_lang.as_deref(),
        )
        .await?;

    Ok(Json(translation))
}
