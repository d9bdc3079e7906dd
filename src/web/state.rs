//! Application state shared across handlers

use crate::config::Settings;
use crate::dispatch::Dispatcher;
use std::sync::Arc;

/// Shared application state. Nothing in here mutates across requests.
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Lookup batch dispatcher
    pub dispatcher: Arc<Dispatcher>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, dispatcher: Dispatcher) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            dispatcher: Arc::new(dispatcher),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
