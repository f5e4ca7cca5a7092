//! Tauri IPC Commands
//!
//! These commands bridge the window chrome to `manta-core`.
//! The chrome never decides where to navigate; it asks.

pub mod content;
pub mod diagnostics;
pub mod navigation;
pub mod overlay;
pub mod settings;
pub mod windows;

use manta_core::NavigationState;
use serde::Serialize;
use tauri::{AppHandle, Emitter};

pub const NAVIGATION_UPDATED: &str = "navigation-updated";

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}

pub fn content_webview_label(window_label: &str) -> String {
    format!("content-{window_label}")
}

/// Push a fresh snapshot to the chrome of `window_label`
pub fn emit_navigation(app: &AppHandle, window_label: &str, state: &NavigationState) {
    if let Err(e) = app.emit_to(ui_webview_label(window_label), NAVIGATION_UPDATED, state) {
        tracing::warn!(window = %window_label, error = %e, "Failed to emit navigation state");
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
