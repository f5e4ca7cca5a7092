//! Manta Navigation
//!
//! Address bar input resolution:
//! 1. `http://` / `https://` → navigate unchanged
//! 2. Bare domain (no whitespace, has a dot) → navigate over https
//! 3. Anything else → search
//!
//! Session history is a cursor over an append-only, truncate-on-branch list.

mod error;
mod history;
mod input;
mod title;

pub use error::NavigationError;
pub use history::{HistoryStack, NavigationEntry};
pub use input::{InputResolution, InputResolver, DEFAULT_SEARCH_ENGINE};
pub use title::{page_label, BLANK_PAGE_LABEL};

pub type Result<T> = std::result::Result<T, NavigationError>;
