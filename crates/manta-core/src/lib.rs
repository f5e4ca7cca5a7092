//! Manta Core
//!
//! Per-window browsing state and application configuration.
//! The shell renders; this crate decides what to render.

mod browser;
mod config;
mod error;
mod overlay;

pub use browser::{BrowserSession, NavigationState};
pub use config::Config;
pub use error::CoreError;
pub use overlay::{Overlay, Shortcut};

// Re-export navigation components
pub use manta_navigation::{
    page_label, HistoryStack, InputResolution, InputResolver, NavigationEntry, NavigationError,
    BLANK_PAGE_LABEL, DEFAULT_SEARCH_ENGINE,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
