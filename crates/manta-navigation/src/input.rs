//! Input resolution for the address bar
//!
//! 1. Scheme-prefixed URL → navigate as typed
//! 2. Domain-looking text → navigate over https
//! 3. Anything else → search

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// Search engine used when no template is configured (`%s` is the query).
pub const DEFAULT_SEARCH_ENGINE: &str = "https://www.google.com/search?q=%s";

const QUERY_PLACEHOLDER: &str = "%s";

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Perform a search; carries the search engine URL
    Search(String),
}

impl InputResolution {
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, InputResolution::Search(_))
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_ENGINE.to_string(),
        }
    }

    /// Build a resolver around a custom search engine template.
    pub fn with_search_engine(template: String) -> Result<Self> {
        Self::validate_template(&template)?;
        Ok(Self {
            search_template: template,
        })
    }

    pub fn set_search_engine(&mut self, template: String) -> Result<()> {
        Self::validate_template(&template)?;
        self.search_template = template;
        Ok(())
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into a navigation target
    pub fn resolve(&self, input: &str) -> Result<InputResolution> {
        let input = input.trim();

        if input.is_empty() {
            return Err(NavigationError::EmptyInput);
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Ok(InputResolution::Navigate(input.to_string()));
        }

        if Self::looks_like_domain(input) {
            return Ok(InputResolution::Navigate(format!("https://{input}")));
        }

        Ok(InputResolution::Search(self.build_search_url(input)))
    }

    /// Resolve user input straight to the URL to load
    pub fn resolve_url(&self, input: &str) -> Result<String> {
        self.resolve(input).map(InputResolution::into_url)
    }

    /// No whitespace anywhere and at least one dot. A lone `.` is a search.
    fn looks_like_domain(input: &str) -> bool {
        input != "." && !input.chars().any(char::is_whitespace) && input.contains('.')
    }

    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace(QUERY_PLACEHOLDER, &encoded)
    }

    fn validate_template(template: &str) -> Result<()> {
        if !template.contains(QUERY_PLACEHOLDER) {
            return Err(NavigationError::InvalidSearchTemplate(format!(
                "missing {QUERY_PLACEHOLDER} placeholder in {template}"
            )));
        }

        let sample = template.replace(QUERY_PLACEHOLDER, "query");
        match Url::parse(&sample) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(NavigationError::InvalidSearchTemplate(format!(
                "unsupported scheme {} in {template}",
                url.scheme()
            ))),
            Err(e) => Err(NavigationError::InvalidSearchTemplate(format!(
                "{template}: {e}"
            ))),
        }
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEARCH_PREFIX: &str = "https://www.google.com/search?q=";

    #[test]
    fn test_resolve_url() {
        let resolver = InputResolver::new();

        // Full URL
        assert_eq!(
            resolver.resolve("https://example.com").unwrap(),
            InputResolution::Navigate("https://example.com".to_string())
        );
        assert_eq!(
            resolver.resolve("http://example.com/a b").unwrap(),
            InputResolution::Navigate("http://example.com/a b".to_string())
        );

        // Domain only
        assert_eq!(
            resolver.resolve("github.com").unwrap(),
            InputResolution::Navigate("https://github.com".to_string())
        );

        // Surrounding whitespace is dropped
        assert_eq!(
            resolver.resolve_url("  rust-lang.org/learn \n").unwrap(),
            "https://rust-lang.org/learn"
        );
    }

    #[test]
    fn test_resolve_search() {
        let resolver = InputResolver::new();

        let resolution = resolver.resolve("best pizza near me").unwrap();
        assert!(resolution.is_search());
        assert_eq!(
            resolution.url(),
            "https://www.google.com/search?q=best%20pizza%20near%20me"
        );

        // No dot means no domain
        assert_eq!(
            resolver.resolve_url("localhost").unwrap(),
            "https://www.google.com/search?q=localhost"
        );
    }

    #[test]
    fn test_whitespace_beats_dot() {
        let resolver = InputResolver::new();

        assert_eq!(
            resolver.resolve_url("a.b c").unwrap(),
            "https://www.google.com/search?q=a.b%20c"
        );
        assert!(resolver.resolve("a.b\tc").unwrap().is_search());
    }

    #[test]
    fn test_lone_dot_is_search() {
        let resolver = InputResolver::new();

        assert_eq!(
            resolver.resolve_url(".").unwrap(),
            "https://www.google.com/search?q=."
        );
        assert_eq!(resolver.resolve_url(" . ").unwrap(), "https://www.google.com/search?q=.");
    }

    #[test]
    fn test_dot_runs_are_domains() {
        let resolver = InputResolver::new();

        assert_eq!(resolver.resolve_url("..").unwrap(), "https://..");
        assert_eq!(resolver.resolve_url("...").unwrap(), "https://...");
        assert_eq!(resolver.resolve_url(".a").unwrap(), "https://.a");
    }

    #[test]
    fn test_empty_input() {
        let resolver = InputResolver::new();

        assert_eq!(resolver.resolve(""), Err(NavigationError::EmptyInput));
        assert_eq!(resolver.resolve("   "), Err(NavigationError::EmptyInput));
        assert_eq!(resolver.resolve("\t\n"), Err(NavigationError::EmptyInput));
    }

    #[test]
    fn test_custom_search_engine() {
        let resolver =
            InputResolver::with_search_engine("https://duckduckgo.com/?q=%s".to_string())
                .unwrap();

        assert_eq!(
            resolver.resolve_url("rust programming").unwrap(),
            "https://duckduckgo.com/?q=rust%20programming"
        );
    }

    #[test]
    fn test_invalid_search_engine() {
        assert!(matches!(
            InputResolver::with_search_engine("https://example.com/search".to_string()),
            Err(NavigationError::InvalidSearchTemplate(_))
        ));
        assert!(matches!(
            InputResolver::with_search_engine("ftp://example.com/?q=%s".to_string()),
            Err(NavigationError::InvalidSearchTemplate(_))
        ));
        assert!(matches!(
            InputResolver::with_search_engine("not a url %s".to_string()),
            Err(NavigationError::InvalidSearchTemplate(_))
        ));

        let mut resolver = InputResolver::new();
        assert!(resolver.set_search_engine("nope".to_string()).is_err());
        assert_eq!(resolver.search_template(), DEFAULT_SEARCH_ENGINE);
    }

    proptest! {
        #[test]
        fn prop_domain_gets_https(raw in "[a-z0-9-]{1,12}(\\.[a-z0-9-]{1,12}){1,3}(/[a-z0-9]{0,8})?") {
            let resolver = InputResolver::new();
            prop_assert_eq!(resolver.resolve_url(&raw).unwrap(), format!("https://{raw}"));
        }

        #[test]
        fn prop_dotted_runs_get_https(raw in "[!-~&&[^.]]{0,6}\\.[!-~]{1,10}") {
            prop_assume!(!raw.starts_with("http://") && !raw.starts_with("https://"));
            let resolver = InputResolver::new();
            prop_assert_eq!(resolver.resolve_url(&raw).unwrap(), format!("https://{raw}"));
        }

        #[test]
        fn prop_scheme_passthrough(raw in "https?://[!-~]{0,24}") {
            let resolver = InputResolver::new();
            prop_assert_eq!(resolver.resolve_url(&raw).unwrap(), raw);
        }

        #[test]
        fn prop_whitespace_is_search(raw in "[a-z0-9.]{1,10}([ \t]+[!-~]{1,10}){1,3}") {
            let resolver = InputResolver::new();
            let url = resolver.resolve_url(&raw).unwrap();

            prop_assert!(url.starts_with(SEARCH_PREFIX));
            let decoded = urlencoding::decode(&url[SEARCH_PREFIX.len()..]).unwrap();
            prop_assert_eq!(decoded.as_ref(), raw.as_str());
        }

        #[test]
        fn prop_blank_is_empty_input(raw in "[ \t\r\n]{0,8}") {
            let resolver = InputResolver::new();
            prop_assert_eq!(resolver.resolve(&raw), Err(NavigationError::EmptyInput));
        }
    }
}
