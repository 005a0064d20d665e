//! Fade-in of cards as they scroll into view.
//!
//! [`prepare`] hides every candidate and declares the transition; the host
//! then observes the returned nodes and calls [`reveal`] for each
//! intersection entry. Revealing only writes final values, so repeated
//! entries for the same node are harmless.

#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

use crate::consts::*;
use crate::error::FolioError;
use crate::page::Page;

/// Intersection watcher settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport box.
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: FADE_THRESHOLD, root_margin: FADE_ROOT_MARGIN }
    }
}

/// Hide all fade candidates and return them for observation.
///
/// A candidate that rejects inline styles is logged and left out; it stays
/// visible and is not observed.
pub fn prepare<P: Page>(page: &P, selector: &str) -> Result<Vec<P::Node>, FolioError> {
    let mut targets = Vec::new();
    for node in page.query_all(selector)? {
        if let Err(err) = hide(page, &node) {
            log::warn!("skipping fade target {node:?}: {err}");
            continue;
        }
        targets.push(node);
    }
    Ok(targets)
}

fn hide<P: Page>(page: &P, node: &P::Node) -> Result<(), FolioError> {
    page.set_style(node, "opacity", FADE_HIDDEN_OPACITY)?;
    page.set_style(node, "transform", FADE_HIDDEN_TRANSFORM)?;
    page.set_style(node, "transition", FADE_TRANSITION)
}

/// Apply the visible end state when `intersecting`. Returns whether styles
/// were written.
pub fn reveal<P: Page>(page: &P, node: &P::Node, intersecting: bool) -> Result<bool, FolioError> {
    if !intersecting {
        return Ok(false);
    }
    page.set_style(node, "opacity", FADE_SHOWN_OPACITY)?;
    page.set_style(node, "transform", FADE_SHOWN_TRANSFORM)?;
    Ok(true)
}
