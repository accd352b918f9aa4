use std::sync::Arc;

use errors::Error;

use crate::service::QnaService;

/// Shared by every worker. Without a service only the health and banner
/// routes succeed; every other route answers 503.
#[derive(Clone)]
pub struct AppState {
    service: Option<Arc<dyn QnaService>>,
}

impl AppState {
    pub fn new(service: Arc<dyn QnaService>) -> Self {
        AppState {
            service: Some(service),
        }
    }

    #[cfg(test)]
    pub fn unavailable() -> Self {
        AppState { service: None }
    }

    pub fn service(&self) -> Result<Arc<dyn QnaService>, Error> {
        self.service
            .clone()
            .ok_or_else(|| Error::ServiceUnavailable("Service not available".into()))
    }
}
