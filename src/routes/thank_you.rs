use askama_axum::Template;
use axum::response::{IntoResponse, Response};

#[derive(Template)]
#[template(path = "thank_you.html")]
struct ThankYouPage;

/// Fixed destination after a subscription is submitted, reached regardless of
/// the hand-off's outcome.
pub async fn thank_you() -> Response {
    ThankYouPage.into_response()
}
