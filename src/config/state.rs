// Application state shared by every handler

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::database::NotificationStore;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub store: Arc<dyn NotificationStore>,
}

impl AppState {
    /// Bundles the loaded configuration with the store handlers will query
    pub fn new(environment: Arc<EnvironmentVariables>, store: Arc<dyn NotificationStore>) -> Self {
        Self { environment, store }
    }
}
