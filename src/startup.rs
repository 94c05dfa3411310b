use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::configuration::Settings;
use crate::newsletter_client::NewsletterClient;
use crate::routes::{about, health_check, home, projects, subscribe, thank_you};
use crate::AppState;

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let newsletter_client = NewsletterClient::new(configuration.newsletter)
            .context("Failed to build the newsletter client.")?;
        let app_state = AppState {
            newsletter_client: Arc::new(newsletter_client),
        };

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}."))?;
        // Port 0 asks the OS for a random free port; report the real one.
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: router(app_state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        axum::serve(self.listener, self.router).await
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health_check", get(health_check))
        .route("/about", get(about))
        .route("/projects", get(projects))
        .route("/thank-you", get(thank_you))
        .route("/subscriptions", post(subscribe))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(app_state)
}
