use askama_axum::Template;
use axum::response::{IntoResponse, Response};

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage;

pub async fn home() -> Response {
    HomePage.into_response()
}
