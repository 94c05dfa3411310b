use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Deserialize)]
pub struct FormData {
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
}

/// `POST /subscriptions`.
///
/// Acknowledges success on every code path: the subscriber is never blocked on
/// the downstream hand-off. A failed forward is recorded in the logs so that
/// silent data loss stays visible to operators.
#[tracing::instrument(
    name = "Relaying a newsletter subscription",
    skip(state, form),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    State(state): State<AppState>,
    form: Option<Form<FormData>>,
) -> Json<SubscribeResponse> {
    // An unreadable body degrades to "no email"; the endpoint's own validation
    // is the only backstop.
    let email = form.and_then(|form| form.0.email);
    if let Some(email) = &email {
        tracing::Span::current().record("subscriber_email", tracing::field::display(email));
    }

    if let Err(e) = state.newsletter_client.subscribe(email.as_deref()).await {
        tracing::error!(error = ?e, "Failed to forward a subscription, the submission is lost");
    }

    Json(SubscribeResponse { success: true })
}
