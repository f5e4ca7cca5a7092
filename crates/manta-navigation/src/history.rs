//! Session history
//!
//! ```text
//! [blank] ── push(A) ──▶ [blank, A] ── push(B) ──▶ [blank, A, B]
//!                                                        │ back
//!                         [blank, A, C] ◀── push(C) ── [blank, A*, B]
//! ```
//!
//! Pushing from a non-tip position drops everything after the cursor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single resolved URL in the history list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationEntry(String);

impl NavigationEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The entry every history list starts with
    pub fn blank() -> Self {
        Self(String::new())
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NavigationEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryStack {
    /// Never empty
    entries: Vec<NavigationEntry>,
    /// Always a valid index into `entries`
    position: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            entries: vec![NavigationEntry::blank()],
            position: 0,
        }
    }

    /// Record a navigation, discarding any forward entries
    pub fn push(&mut self, url: impl Into<String>) -> &NavigationEntry {
        let entry = NavigationEntry::new(url);
        let discarded = self.entries.len() - (self.position + 1);

        self.entries.truncate(self.position + 1);
        self.entries.push(entry);
        self.position = self.entries.len() - 1;

        tracing::debug!(
            url = %self.entries[self.position],
            position = self.position,
            discarded,
            "History push"
        );

        &self.entries[self.position]
    }

    /// Step back one entry; a no-op at the start of the list
    pub fn back(&mut self) -> &NavigationEntry {
        if self.can_go_back() {
            self.position -= 1;
        } else {
            tracing::debug!("History back ignored at first entry");
        }
        self.current()
    }

    /// Step forward one entry; a no-op at the tip of the list
    pub fn forward(&mut self) -> &NavigationEntry {
        if self.can_go_forward() {
            self.position += 1;
        } else {
            tracing::debug!("History forward ignored at last entry");
        }
        self.current()
    }

    pub fn current(&self) -> &NavigationEntry {
        &self.entries[self.position]
    }

    /// The entry to request again; does not touch the cursor.
    pub fn reload(&self) -> &NavigationEntry {
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the blank entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_history() {
        let history = HistoryStack::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
        assert!(history.current().is_blank());
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_back_returns_previous() {
        let mut history = HistoryStack::new();
        history.push("https://a.example");
        history.push("https://b.example");

        assert_eq!(history.back().url(), "https://a.example");
        assert_eq!(history.current().url(), "https://a.example");
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = HistoryStack::new();
        history.push("https://a.example");
        history.push("https://b.example");
        history.back();
        history.push("https://c.example");

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());

        // Nothing beyond C
        assert_eq!(history.forward().url(), "https://c.example");
        assert_eq!(history.position(), 2);
        assert!(history
            .entries()
            .iter()
            .all(|entry| entry.url() != "https://b.example"));
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut history = HistoryStack::new();

        let current = history.back().clone();
        assert!(current.is_blank());
        assert_eq!(history.position(), 0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_forward_at_tip_is_noop() {
        let mut history = HistoryStack::new();
        history.push("https://a.example");

        assert_eq!(history.forward().url(), "https://a.example");
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_reload_keeps_position() {
        let mut history = HistoryStack::new();
        history.push("https://a.example");
        history.push("https://b.example");
        history.back();

        assert_eq!(history.reload().url(), "https://a.example");
        assert_eq!(history.position(), 1);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_github_round_trip() {
        let mut history = HistoryStack::new();
        history.push("https://github.com");
        assert_eq!(history.position(), 1);

        assert!(history.back().is_blank());
        assert_eq!(history.position(), 0);

        assert_eq!(history.forward().url(), "https://github.com");
        assert_eq!(history.position(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(String),
        Back,
        Forward,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{1,6}".prop_map(|s| Op::Push(format!("https://{s}.example"))),
            Just(Op::Back),
            Just(Op::Forward),
        ]
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(ops in prop::collection::vec(op(), 0..64)) {
            let mut history = HistoryStack::new();
            for op in ops {
                match op {
                    Op::Push(url) => {
                        history.push(url.clone());
                        prop_assert_eq!(history.current().url(), url.as_str());
                        prop_assert!(!history.can_go_forward());
                    }
                    Op::Back => {
                        let before = history.position();
                        history.back();
                        prop_assert_eq!(history.position(), before.saturating_sub(1));
                    }
                    Op::Forward => {
                        let before = history.position();
                        history.forward();
                        prop_assert_eq!(history.position(), (before + 1).min(history.len() - 1));
                    }
                }
                prop_assert!(!history.is_empty());
                prop_assert!(history.position() < history.len());
                prop_assert!(history.entries()[0].is_blank());
            }
        }
    }
}
