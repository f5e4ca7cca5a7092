//! Native window commands
//!
//! Every browser window is frameless: the chrome webview draws the title bar
//! and the window buttons call back into these commands.

use manta_core::{Config, NavigationState};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, WebviewUrl, Window};

use super::content::{self, ContentBounds};
use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct NewWindowInfo {
    pub window_label: String,
    pub navigation: NavigationState,
}

/// Frameless window with the chrome webview filling it and the content view
/// between the title bar and the bottom bar.
pub fn build_browser_window(
    app: &AppHandle,
    window_label: &str,
    config: &Config,
    url: &str,
) -> Result<(), String> {
    let window = WindowBuilder::new(app, window_label)
        .title(&config.window_title)
        .inner_size(config.window_width, config.window_height)
        .min_inner_size(480.0, 360.0)
        .decorations(false)
        .center()
        .build()
        .map_err(|e| e.to_string())?;

    let ui_webview = WebviewBuilder::new(
        super::ui_webview_label(window_label),
        WebviewUrl::App("index.html".into()),
    )
    .auto_resize();

    let ui_webview = window
        .add_child(
            ui_webview,
            LogicalPosition::new(0.0, 0.0),
            LogicalSize::new(config.window_width, config.window_height),
        )
        .map_err(|e| e.to_string())?;

    if let Err(e) = ui_webview.show() {
        tracing::warn!(window = %window_label, error = %e, "Failed to show chrome webview");
    }

    let bounds = ContentBounds::for_window(config.window_width, config.window_height);
    content::create_content_view(app, &window, url, bounds)?;

    tracing::info!(window = %window_label, url = %url, "Browser window created");
    Ok(())
}

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// Unique for the life of the process, even across concurrent commands
fn next_window_label() -> String {
    let id = NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed);
    format!("window-{id}")
}

#[tauri::command]
pub fn minimize_window(window: Window) -> CommandResult<()> {
    match window.minimize() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn toggle_maximize_window(window: Window) -> CommandResult<bool> {
    let maximized = window.is_maximized().unwrap_or(false);
    let result = if maximized {
        window.unmaximize()
    } else {
        window.maximize()
    };

    match result {
        Ok(()) => CommandResult::ok(!maximized),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn close_window(window: Window) -> CommandResult<()> {
    match window.close() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Open `input` in a new native window with its own, independent history.
#[tauri::command]
pub async fn open_url_in_new_window(app: AppHandle, input: String) -> CommandResult<NewWindowInfo> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    let window_label = next_window_label();

    let navigation = match state.open_session(&window_label, Some(&input)) {
        Ok(nav) => nav,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let config = state.config();
    if let Err(e) = build_browser_window(&app, &window_label, &config, &navigation.display_url) {
        state.close_session(&window_label);
        return CommandResult::err(format!("Failed to create window: {e}"));
    }

    CommandResult::ok(NewWindowInfo {
        window_label,
        navigation,
    })
}
