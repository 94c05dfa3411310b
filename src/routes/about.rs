use askama_axum::Template;
use axum::response::{IntoResponse, Response};

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage;

pub async fn about() -> Response {
    AboutPage.into_response()
}
