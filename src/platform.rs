//! Host capabilities the feed may use when present.

use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("service workers are not supported by this host")]
    Unsupported,
    #[error("service worker registration for {script} failed: {reason}")]
    Registration { script: String, reason: String },
}

/// Capabilities offered by the environment hosting the feed.
pub trait Platform: Send + Sync {
    fn supports_service_worker(&self) -> bool;

    /// Register a service worker script.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot register the script.
    fn register_service_worker(&self, script: &str) -> Result<(), PlatformError>;
}

/// Platform for server-rendered pages.
///
/// Registrations are collected and emitted by the page layout as a
/// capability-guarded snippet, so the browser performs them on load.
#[derive(Debug, Default)]
pub struct PageScripts {
    service_workers: Mutex<Vec<String>>,
}

impl PageScripts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts registered so far, in registration order.
    #[must_use]
    pub fn service_workers(&self) -> Vec<String> {
        self.service_workers
            .lock()
            .map(|scripts| scripts.clone())
            .unwrap_or_default()
    }
}

impl Platform for PageScripts {
    fn supports_service_worker(&self) -> bool {
        true
    }

    fn register_service_worker(&self, script: &str) -> Result<(), PlatformError> {
        let mut scripts = self
            .service_workers
            .lock()
            .map_err(|e| PlatformError::Registration {
                script: script.to_string(),
                reason: e.to_string(),
            })?;
        if !scripts.iter().any(|s| s == script) {
            scripts.push(script.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_scripts_records_registration() {
        let scripts = PageScripts::new();
        scripts.register_service_worker("/sw.js").unwrap();

        assert_eq!(scripts.service_workers(), vec!["/sw.js".to_string()]);
    }

    #[test]
    fn test_page_scripts_deduplicates() {
        let scripts = PageScripts::new();
        scripts.register_service_worker("/sw.js").unwrap();
        scripts.register_service_worker("/sw.js").unwrap();

        assert_eq!(scripts.service_workers().len(), 1);
    }
}
