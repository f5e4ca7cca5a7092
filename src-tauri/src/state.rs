//! Application state management

use manta_core::{BrowserSession, Config, CoreError, NavigationState, Result};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    config: Arc<RwLock<Config>>,
    config_path: PathBuf,
    /// Browsing session per window label
    sessions: Arc<RwLock<HashMap<String, BrowserSession>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config_path(Config::default_path())
    }

    /// State backed by the config file at `config_path`
    pub fn with_config_path(config_path: PathBuf) -> Self {
        let config = Config::load_or_default(&config_path);

        Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Register a fresh session for a window, optionally navigating to `input`.
    ///
    /// Fails if the window already has a session; the existing one is kept.
    pub fn open_session(&self, window_label: &str, input: Option<&str>) -> Result<NavigationState> {
        let config = self.config();
        let session = match input {
            Some(input) => BrowserSession::with_initial_url(&config, input)?,
            None => BrowserSession::new(&config)?,
        };
        let state = session.state();

        match self.sessions.write().entry(window_label.to_string()) {
            Entry::Occupied(_) => {
                return Err(CoreError::Config(format!(
                    "window {window_label} already has a session"
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(session);
            }
        }

        tracing::info!(window = %window_label, "Browser session opened");
        Ok(state)
    }

    pub fn close_session(&self, window_label: &str) {
        if self.sessions.write().remove(window_label).is_some() {
            tracing::info!(window = %window_label, "Browser session closed");
        }
    }

    pub fn with_session<F, T>(&self, window_label: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut BrowserSession) -> Result<T>,
    {
        let mut guard = self.sessions.write();
        match guard.get_mut(window_label) {
            Some(session) => f(session),
            None => Err(CoreError::NotInitialized(window_label.to_string())),
        }
    }

    /// Validate, persist and apply a new search engine to every window.
    pub fn set_search_engine(&self, template: String) -> Result<Config> {
        let mut next = self.config();
        next.search_engine = template;
        next.validate()?;
        next.save(&self.config_path)?;

        for session in self.sessions.write().values_mut() {
            session.set_search_engine(next.search_engine.clone())?;
        }

        *self.config.write() = next.clone();
        tracing::info!(search_engine = %next.search_engine, "Search engine updated");
        Ok(next)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
