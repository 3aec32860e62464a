use std::sync::Arc;

use services::InterviewApi;

pub trait UiApp: Send + Sync {
    fn api(&self) -> Arc<dyn InterviewApi>;

    /// Base URL shown in diagnostics.
    fn api_base_url(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn InterviewApi>,
    api_base_url: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            api: app.api(),
            api_base_url: app.api_base_url(),
        }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn InterviewApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
