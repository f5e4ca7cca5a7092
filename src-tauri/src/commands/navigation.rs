//! Navigation and address bar commands

use manta_core::{InputResolution, NavigationState};
use tauri::{AppHandle, State, Window};

use super::{content, CommandResult};
use crate::state::AppState;

/// Show `url` in the content view; load failures are logged, never undone.
fn load_and_emit(app: &AppHandle, window_label: &str, url: &str, nav: &NavigationState) {
    if let Err(e) = content::load_url(app, window_label, url) {
        tracing::warn!(window = %window_label, url = %url, error = %e, "Content load failed");
    }
    // Navigation also dismisses the overlay
    if let Err(e) = content::set_visible(app, window_label, !nav.overlay_visible) {
        tracing::warn!(window = %window_label, error = %e, "Content visibility not restored");
    }
    super::emit_navigation(app, window_label, nav);
}

/// Preview how address bar input would resolve
#[tauri::command]
pub fn resolve_input(
    window: Window,
    state: State<AppState>,
    input: String,
) -> CommandResult<InputResolution> {
    match state.with_session(window.label(), |session| session.resolve(&input)) {
        Ok(resolution) => CommandResult::ok(resolution),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn navigate(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    input: String,
) -> CommandResult<NavigationState> {
    let window_label = window.label();

    let result = state.with_session(window_label, |session| {
        let url = session.navigate(&input)?.to_string();
        Ok((url, session.state()))
    });

    match result {
        Ok((url, nav)) => {
            load_and_emit(&app, window_label, &url, &nav);
            CommandResult::ok(nav)
        }
        Err(e) if e.is_empty_input() => {
            tracing::debug!(window = %window_label, "Ignoring empty address bar input");
            match state.with_session(window_label, |session| Ok(session.state())) {
                Ok(nav) => CommandResult::ok(nav),
                Err(e) => CommandResult::err(e.to_string()),
            }
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Move the history cursor with `step` and load the new entry if it moved
fn step_history<F>(
    app: &AppHandle,
    window_label: &str,
    state: &AppState,
    step: F,
) -> CommandResult<NavigationState>
where
    F: FnOnce(&mut manta_core::BrowserSession) -> String,
{
    let result = state.with_session(window_label, |session| {
        let before = session.history().position();
        let url = step(session);
        let moved = session.history().position() != before;
        Ok((moved, url, session.state()))
    });

    match result {
        Ok((true, url, nav)) => {
            load_and_emit(app, window_label, &url, &nav);
            CommandResult::ok(nav)
        }
        Ok((false, _, nav)) => CommandResult::ok(nav),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn go_back(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
) -> CommandResult<NavigationState> {
    step_history(&app, window.label(), &state, |session| {
        session.go_back().to_string()
    })
}

#[tauri::command]
pub fn go_forward(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
) -> CommandResult<NavigationState> {
    step_history(&app, window.label(), &state, |session| {
        session.go_forward().to_string()
    })
}

/// Request the current entry again
#[tauri::command]
pub fn reload(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
) -> CommandResult<NavigationState> {
    let window_label = window.label();

    let result = state.with_session(window_label, |session| {
        Ok((session.reload().to_string(), session.state()))
    });

    match result {
        Ok((url, nav)) => {
            if let Err(e) = content::load_url(&app, window_label, &url) {
                tracing::warn!(window = %window_label, url = %url, error = %e, "Reload failed");
            }
            CommandResult::ok(nav)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_navigation_state(
    window: Window,
    state: State<AppState>,
) -> CommandResult<NavigationState> {
    match state.with_session(window.label(), |session| Ok(session.state())) {
        Ok(nav) => CommandResult::ok(nav),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
