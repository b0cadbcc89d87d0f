//! Public form endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// ```text
/// POST /contact            -> submit_contact
/// POST /book-reservation   -> submit_booking
/// POST /leads              -> capture_lead
/// POST /schedule           -> track_schedule
/// POST /translate          -> translate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(forms::submit_contact))
        .route("/book-reservation", post(forms::submit_booking))
        .route("/leads", post(forms::capture_lead))
        .route("/schedule", post(forms::track_schedule))
        .route("/translate", post(forms::translate))
}
