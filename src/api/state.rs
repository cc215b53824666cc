//! Application state for the Overtime Computation Engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration, whose resolved policy is the default for
/// every request. It is immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Policy;

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(ConfigLoader::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
        assert_eq!(clone.config().policy(), &Policy::default());
    }
}
