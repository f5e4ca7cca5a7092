//! Manta Browser - Tauri Application
//!
//! - Frameless window, chrome drawn by the UI webview
//! - One content webview per window
//! - Rust owns all navigation state

mod commands;
mod state;

use commands::content::ContentViews;
use state::AppState;
use tauri::{Manager, WindowEvent};

const MAIN_WINDOW: &str = "main";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
#[allow(clippy::expect_used)]
pub fn run() {
    // Initialize logging
    manta_core::init_logging();

    tauri::Builder::default()
        .setup(|app| {
            let state = AppState::new();
            let config = state.config();
            let navigation = state.open_session(MAIN_WINDOW, None)?;

            // Store state in Tauri
            app.manage(state);
            app.manage(ContentViews::new());

            commands::windows::build_browser_window(
                app.handle(),
                MAIN_WINDOW,
                &config,
                &navigation.display_url,
            )?;

            tracing::info!("Manta Browser started");

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let label = window.label();
                commands::content::close(window.app_handle(), label);
                if let Some(state) = window.try_state::<AppState>() {
                    state.close_session(label);
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Window commands
            commands::windows::minimize_window,
            commands::windows::toggle_maximize_window,
            commands::windows::close_window,
            commands::windows::open_url_in_new_window,
            // Navigation commands
            commands::navigation::resolve_input,
            commands::navigation::navigate,
            commands::navigation::go_back,
            commands::navigation::go_forward,
            commands::navigation::reload,
            commands::navigation::get_navigation_state,
            // Overlay commands
            commands::overlay::handle_shortcut,
            commands::overlay::set_overlay_visible,
            // Content commands
            commands::content::set_content_bounds,
            // Settings commands
            commands::settings::get_settings,
            commands::settings::set_search_engine,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Manta browser");
}
