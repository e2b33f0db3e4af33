use crate::config::Config;
use crate::templates::TemplateEngine;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub templates: Arc<TemplateEngine>,
    pub config: Arc<Config>,
}
