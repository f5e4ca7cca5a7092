//! Address bar overlay commands
//!
//! The content view is a native child webview stacked above the chrome, so it
//! is hidden while the overlay is open.

use manta_core::NavigationState;
use tauri::{AppHandle, State, Window};

use super::{content, CommandResult};
use crate::state::AppState;

fn sync_content(app: &AppHandle, window_label: &str, nav: &NavigationState) {
    if let Err(e) = content::set_visible(app, window_label, !nav.overlay_visible) {
        tracing::warn!(window = %window_label, error = %e, "Failed to sync content view");
    }
    super::emit_navigation(app, window_label, nav);
}

/// Keyboard shortcut forwarded by the chrome (`KeyboardEvent.key` + Ctrl)
#[tauri::command]
pub fn handle_shortcut(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    key: String,
    ctrl: bool,
) -> CommandResult<NavigationState> {
    let window_label = window.label();

    let result = state.with_session(window_label, |session| {
        let handled = session.handle_shortcut(&key, ctrl).is_some();
        Ok((handled, session.state()))
    });

    match result {
        Ok((true, nav)) => {
            sync_content(&app, window_label, &nav);
            CommandResult::ok(nav)
        }
        Ok((false, nav)) => CommandResult::ok(nav),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn set_overlay_visible(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    visible: bool,
) -> CommandResult<NavigationState> {
    let window_label = window.label();

    match state.with_session(window_label, |session| {
        session.set_overlay_visible(visible);
        Ok(session.state())
    }) {
        Ok(nav) => {
            sync_content(&app, window_label, &nav);
            CommandResult::ok(nav)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
