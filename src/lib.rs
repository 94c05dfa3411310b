use std::sync::Arc;

use newsletter_client::NewsletterClient;

pub mod configuration;
pub mod newsletter_client;
pub mod routes;
pub mod startup;
pub mod telemetry;

#[derive(Clone)]
pub struct AppState {
    pub newsletter_client: Arc<NewsletterClient>,
}
