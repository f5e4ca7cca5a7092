//! Content view management
//!
//! Each browser window owns exactly one child webview that displays the page
//! at the session's history cursor. Loading is fire-and-forget: a failed load
//! never rolls back history.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, WebviewUrl, Window};

use super::CommandResult;
use crate::state::AppState;

/// Height of the custom title bar drawn by the chrome
pub const TITLE_BAR_HEIGHT: f64 = 32.0;
/// Height of the persistent bottom navigation bar
pub const BOTTOM_BAR_HEIGHT: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentBounds {
    /// Area between the title bar and the bottom bar
    pub fn for_window(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: TITLE_BAR_HEIGHT,
            width,
            height: (height - TITLE_BAR_HEIGHT - BOTTOM_BAR_HEIGHT).max(0.0),
        }
    }
}

/// Tracks content webviews and their bounds per window
pub struct ContentViews {
    /// window label -> content webview label
    views: Arc<RwLock<HashMap<String, String>>>,
    bounds: Arc<RwLock<HashMap<String, ContentBounds>>>,
}

impl ContentViews {
    pub fn new() -> Self {
        Self {
            views: Arc::new(RwLock::new(HashMap::new())),
            bounds: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn get_label(&self, window_label: &str) -> Option<String> {
        self.views.read().get(window_label).cloned()
    }

    pub fn register(&self, window_label: &str, label: String, bounds: ContentBounds) {
        self.views.write().insert(window_label.to_string(), label);
        self.bounds.write().insert(window_label.to_string(), bounds);
    }

    pub fn unregister(&self, window_label: &str) -> Option<String> {
        self.bounds.write().remove(window_label);
        self.views.write().remove(window_label)
    }

    pub fn get_bounds(&self, window_label: &str) -> Option<ContentBounds> {
        self.bounds.read().get(window_label).copied()
    }

    pub fn set_bounds(&self, window_label: &str, bounds: ContentBounds) {
        self.bounds.write().insert(window_label.to_string(), bounds);
    }
}

impl Default for ContentViews {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ContentViews {
    fn clone(&self) -> Self {
        Self {
            views: Arc::clone(&self.views),
            bounds: Arc::clone(&self.bounds),
        }
    }
}

fn parse_target(url: &str) -> Result<url::Url, String> {
    url.parse::<url::Url>()
        .map_err(|e| format!("Invalid URL {url}: {e}"))
}

/// What the content view reported about its page
#[derive(Debug, Clone, Copy)]
enum PageEvent<'a> {
    Started,
    Finished,
    Title(&'a str),
}

/// Update the page label from a content view event and tell the chrome.
fn update_page_title(app: &AppHandle, window_label: &str, event: PageEvent<'_>) {
    let Some(state) = app.try_state::<AppState>() else {
        return;
    };

    match state.with_session(window_label, |session| {
        match event {
            PageEvent::Started => session.page_started(),
            PageEvent::Finished => session.page_finished(),
            PageEvent::Title(title) => session.title_changed(title),
        };
        Ok(session.state())
    }) {
        Ok(nav) => super::emit_navigation(app, window_label, &nav),
        Err(e) => tracing::debug!(window = %window_label, error = %e, "Title update skipped"),
    }
}

/// Attach the content webview to `window` showing `url`.
pub fn create_content_view(
    app: &AppHandle,
    window: &Window,
    url: &str,
    bounds: ContentBounds,
) -> Result<String, String> {
    let window_label = window.label().to_string();
    let webview_label = super::content_webview_label(&window_label);

    let manager = app
        .try_state::<ContentViews>()
        .ok_or_else(|| "ContentViews not found".to_string())?;

    if let Some(existing) = manager.get_label(&window_label) {
        if app.get_webview(&existing).is_some() {
            return Ok(existing);
        }
        manager.unregister(&window_label);
    }

    let webview_url = WebviewUrl::External(parse_target(url)?);

    let app_handle_for_load = app.clone();
    let window_label_for_load = window_label.clone();
    let app_handle_for_title = app.clone();
    let window_label_for_title = window_label.clone();

    let builder = WebviewBuilder::new(&webview_label, webview_url)
        .transparent(false)
        .auto_resize()
        .on_page_load(move |_webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                update_page_title(
                    &app_handle_for_load,
                    &window_label_for_load,
                    PageEvent::Started,
                );
            }
            PageLoadEvent::Finished => {
                tracing::debug!(
                    window = %window_label_for_load,
                    url = %payload.url(),
                    "Content loaded"
                );
                update_page_title(
                    &app_handle_for_load,
                    &window_label_for_load,
                    PageEvent::Finished,
                );
            }
        })
        .on_document_title_changed(move |_webview, title| {
            update_page_title(
                &app_handle_for_title,
                &window_label_for_title,
                PageEvent::Title(&title),
            );
        });

    match window.add_child(
        builder,
        LogicalPosition::new(bounds.x, bounds.y),
        LogicalSize::new(bounds.width, bounds.height),
    ) {
        Ok(_) => {
            manager.register(&window_label, webview_label.clone(), bounds);
            tracing::info!(label = %webview_label, url = %url, "Created content webview");
            Ok(webview_label)
        }
        Err(e) => {
            tracing::error!(label = %webview_label, error = %e, "Failed to create content webview");
            Err(format!("Failed to create webview: {e}"))
        }
    }
}

fn content_webview(app: &AppHandle, window_label: &str) -> Result<tauri::Webview, String> {
    let manager = app
        .try_state::<ContentViews>()
        .ok_or_else(|| "ContentViews not found".to_string())?;

    let label = manager
        .get_label(window_label)
        .ok_or_else(|| format!("No content view for window: {window_label}"))?;

    app.get_webview(&label)
        .ok_or_else(|| format!("Webview not found: {label}"))
}

/// Point the content view of `window_label` at `url`.
pub fn load_url(app: &AppHandle, window_label: &str, url: &str) -> Result<(), String> {
    let webview = content_webview(app, window_label)?;
    let target = parse_target(url)?;

    webview
        .navigate(target)
        .map_err(|e| format!("Navigation failed: {e}"))?;

    tracing::info!(window = %window_label, url = %url, "Content navigated");
    Ok(())
}

/// Hide the content view while the chrome draws over it.
pub fn set_visible(app: &AppHandle, window_label: &str, visible: bool) -> Result<(), String> {
    let webview = content_webview(app, window_label)?;
    let result = if visible {
        webview.show()
    } else {
        webview.hide()
    };
    result.map_err(|e| format!("Failed to toggle content view: {e}"))
}

pub fn close(app: &AppHandle, window_label: &str) {
    let Some(manager) = app.try_state::<ContentViews>() else {
        return;
    };

    if let Some(label) = manager.unregister(window_label) {
        if let Some(webview) = app.get_webview(&label) {
            if let Err(e) = webview.close() {
                tracing::warn!(label = %label, error = %e, "Failed to close content webview");
            }
        }
        tracing::info!(label = %label, "Closed content webview");
    }
}

/// Move the content view when the chrome layout changes
#[tauri::command]
pub fn set_content_bounds(
    app: AppHandle,
    window: Window,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> CommandResult<()> {
    let bounds = ContentBounds {
        x,
        y,
        width,
        height,
    };

    if let Some(manager) = app.try_state::<ContentViews>() {
        manager.set_bounds(window.label(), bounds);
    }

    let webview = match content_webview(&app, window.label()) {
        Ok(w) => w,
        Err(e) => return CommandResult::err(e),
    };

    if let Err(e) = webview.set_position(LogicalPosition::new(x, y)) {
        return CommandResult::err(format!("Failed to set position: {e}"));
    }

    if let Err(e) = webview.set_size(LogicalSize::new(width, height)) {
        return CommandResult::err(format!("Failed to set size: {e}"));
    }

    CommandResult::ok(())
}
