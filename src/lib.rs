use std::{sync::Arc, time::Duration};

mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{content, entities, use_cases};
pub use infrastructure::{preview, scheduler, utils};
pub use interfaces::{handlers, repositories, routes};

use errors::GatewayError;
use repositories::{
    gateway::DataGateway,
    store::{ObjectStore, RowStore},
    supabase::SupabaseClient,
};
use use_cases::{blog::BlogPostHandler, catalog::CatalogHandler, submission::SubmissionHandler};

pub struct AppState {
    pub blog_handler: BlogPostHandler,
    pub catalog_handler: CatalogHandler,
    pub submission_handler: SubmissionHandler,
    pub gateway: DataGateway,
}

impl AppState {
    pub fn new(gateway: DataGateway) -> Self {
        AppState {
            blog_handler: BlogPostHandler::new(gateway.clone()),
            catalog_handler: CatalogHandler::new(gateway.clone()),
            submission_handler: SubmissionHandler::new(gateway.clone()),
            gateway,
        }
    }

    /// Wires every handler to the same row and object store.
    pub fn with_stores(rows: Arc<dyn RowStore>, objects: Arc<dyn ObjectStore>, placeholder: &str) -> Self {
        AppState::new(DataGateway::new(rows, objects, placeholder))
    }

    pub fn from_config(config: &settings::AppConfig) -> Result<Self, GatewayError> {
        let client = Arc::new(SupabaseClient::new(
            config.backend_credentials(),
            Duration::from_secs(config.request_timeout_secs),
        )?);
        Ok(AppState::with_stores(
            client.clone(),
            client,
            &config.placeholder_image,
        ))
    }
}
