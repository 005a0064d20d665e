//! Mobile menu open/close.
//!
//! The menu is open while its container carries the `active` class. The
//! button mirrors the flag so CSS can animate the hamburger icon.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::ACTIVE_CLASS;
use crate::error::FolioError;
use crate::page::Page;

#[must_use]
pub fn is_open<P: Page>(page: &P, menu: &P::Node) -> bool {
    page.has_class(menu, ACTIVE_CLASS)
}

/// Flip the flag on both the menu and the button. Returns whether the menu is
/// now open.
pub fn toggle<P: Page>(page: &P, button: &P::Node, menu: &P::Node) -> Result<bool, FolioError> {
    let open = page.toggle_class(menu, ACTIVE_CLASS)?;
    page.toggle_class(button, ACTIVE_CLASS)?;
    Ok(open)
}

/// Clear the flag on both, whatever the prior state.
pub fn close<P: Page>(page: &P, button: &P::Node, menu: &P::Node) -> Result<(), FolioError> {
    page.remove_class(menu, ACTIVE_CLASS)?;
    page.remove_class(button, ACTIVE_CLASS)
}

/// Close an open menu when a document click lands outside both the menu and
/// the button. Returns whether the menu was closed.
///
/// A click with no element target counts as outside.
pub fn close_on_outside_click<P: Page>(
    page: &P,
    button: &P::Node,
    menu: &P::Node,
    target: Option<&P::Node>,
) -> Result<bool, FolioError> {
    let inside = target.is_some_and(|t| page.contains(menu, t) || page.contains(button, t));
    if inside || !is_open(page, menu) {
        return Ok(false);
    }
    close(page, button, menu)?;
    Ok(true)
}
