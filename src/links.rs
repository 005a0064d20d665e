//! Placeholder-link guard.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::error::FolioError;
use crate::page::Page;

/// Whether `href` is the bare `"#"` used for unfinished links.
#[must_use]
pub fn is_placeholder(href: Option<&str>) -> bool {
    href == Some("#")
}

/// Warn the user that the link goes nowhere.
///
/// Callers suppress the default navigation; this only shows the notice.
pub fn warn_placeholder<P: Page>(page: &P, message: &str) -> Result<(), FolioError> {
    log::debug!("placeholder link activated");
    page.alert(message)
}
