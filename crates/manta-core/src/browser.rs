//! Per-window browsing session
//!
//! One session per native window. The content view only ever shows what
//! `display_url()` returns; all navigation decisions are made here.

use serde::{Deserialize, Serialize};

use manta_navigation::{page_label, HistoryStack, InputResolution, InputResolver};

use crate::config::Config;
use crate::overlay::{Overlay, Shortcut};
use crate::Result;

/// Snapshot of a session for the window chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// URL at the history cursor (empty for the start entry)
    pub current_url: String,
    /// URL the content view loads
    pub display_url: String,
    pub page_title: String,
    pub position: usize,
    pub length: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub overlay_visible: bool,
}

#[derive(Debug, Clone)]
pub struct BrowserSession {
    resolver: InputResolver,
    history: HistoryStack,
    homepage: String,
    page_title: String,
    /// Last title reported by the content view
    document_title: Option<String>,
    overlay: Overlay,
}

impl BrowserSession {
    pub fn new(config: &Config) -> Result<Self> {
        let resolver = config.input_resolver()?;
        let history = HistoryStack::new();
        let page_title = page_label(None, &config.homepage);

        Ok(Self {
            resolver,
            history,
            homepage: config.homepage.clone(),
            page_title,
            document_title: None,
            overlay: Overlay::default(),
        })
    }

    /// Start a session whose first navigation is `input`
    pub fn with_initial_url(config: &Config, input: &str) -> Result<Self> {
        let mut session = Self::new(config)?;
        session.navigate(input)?;
        Ok(session)
    }

    /// Resolve address bar input without touching any state
    pub fn resolve(&self, input: &str) -> Result<InputResolution> {
        Ok(self.resolver.resolve(input)?)
    }

    /// Resolve `input`, record it in history and return the URL to load.
    ///
    /// Blank input fails with `EmptyInput` and changes nothing.
    pub fn navigate(&mut self, input: &str) -> Result<&str> {
        let resolution = self.resolver.resolve(input)?;
        let is_search = resolution.is_search();
        let url = resolution.into_url();

        tracing::info!(url = %url, search = is_search, "Navigate");

        self.page_title = page_label(None, &url);
        self.overlay.hide();
        self.history.push(url);
        Ok(self.history.current().url())
    }

    /// Returns the URL to load; unchanged at the first entry.
    pub fn go_back(&mut self) -> &str {
        let moved = self.history.can_go_back();
        self.history.back();
        if moved {
            self.refresh_title();
        }
        self.display_url()
    }

    /// Returns the URL to load; unchanged at the last entry.
    pub fn go_forward(&mut self) -> &str {
        let moved = self.history.can_go_forward();
        self.history.forward();
        if moved {
            self.refresh_title();
        }
        self.display_url()
    }

    /// URL to request again from the content view
    pub fn reload(&self) -> &str {
        self.display_url_for(self.history.reload().url())
    }

    pub fn current_url(&self) -> &str {
        self.history.current().url()
    }

    pub fn display_url(&self) -> &str {
        self.display_url_for(self.history.current().url())
    }

    /// The content view finished loading; `title` is the document title if
    /// it could be read.
    pub fn page_loaded(&mut self, title: Option<&str>) -> &str {
        self.page_title = page_label(title, self.display_url());
        &self.page_title
    }

    /// A load started; the label falls back to the host until the page is done.
    pub fn page_started(&mut self) -> &str {
        self.refresh_title();
        &self.page_title
    }

    /// The content view reported a new document title.
    pub fn title_changed(&mut self, title: &str) -> &str {
        self.document_title = Some(title.to_string());
        self.page_loaded(Some(title))
    }

    /// A load finished. Title reports only arrive on change, so a page whose
    /// title matches the previous one keeps the last reported title.
    pub fn page_finished(&mut self) -> &str {
        self.page_title = page_label(self.document_title.as_deref(), self.display_url());
        &self.page_title
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn resolver(&self) -> &InputResolver {
        &self.resolver
    }

    pub fn set_search_engine(&mut self, template: String) -> Result<()> {
        Ok(self.resolver.set_search_engine(template)?)
    }

    /// Returns the new overlay visibility, or `None` for unbound keys
    pub fn handle_shortcut(&mut self, key: &str, ctrl: bool) -> Option<bool> {
        let shortcut = Shortcut::from_key(key, ctrl)?;
        let visible = self.overlay.apply(shortcut);
        tracing::debug!(?shortcut, visible, "Overlay shortcut");
        Some(visible)
    }

    pub fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay.set_visible(visible);
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_url: self.current_url().to_string(),
            display_url: self.display_url().to_string(),
            page_title: self.page_title.clone(),
            position: self.history.position(),
            length: self.history.len(),
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
            overlay_visible: self.overlay.is_visible(),
        }
    }

    fn display_url_for<'a>(&'a self, url: &'a str) -> &'a str {
        if url.is_empty() {
            &self.homepage
        } else {
            url
        }
    }

    fn refresh_title(&mut self) {
        self.page_title = page_label(None, self.display_url());
    }
}
