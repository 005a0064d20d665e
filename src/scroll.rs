//! Scroll-driven behavior: in-page smooth scrolling, the active nav link and
//! the navbar shadow.
//!
//! Section geometry is read from the page on every call; nothing is cached,
//! so layout changes are picked up on the next scroll event.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{ACTIVE_CLASS, SHADOW_ELEVATED, SHADOW_FLAT};
use crate::error::FolioError;
use crate::page::{Page, Span};

// =============================================================================
// SMOOTH SCROLL
// =============================================================================

/// The fragment of an in-page href (`"#about"` -> `"about"`).
///
/// Returns `None` for the bare `"#"` and for hrefs that are not fragments.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll to the element an anchor points at. Returns the target, if found.
///
/// A missing target is not an error; the click simply does nothing.
pub fn smooth_scroll<P: Page>(page: &P, anchor: &P::Node) -> Result<Option<P::Node>, FolioError> {
    let Some(href) = page.attribute(anchor, "href") else {
        return Ok(None);
    };
    let Some(id) = fragment(&href) else {
        return Ok(None);
    };
    let Some(target) = page.element_by_id(id) else {
        log::debug!("anchor {href} has no target");
        return Ok(None);
    };
    page.scroll_into_view(&target)?;
    Ok(Some(target))
}

// =============================================================================
// ACTIVE SECTION
// =============================================================================

/// The first section, in document order, whose span contains `y`.
#[must_use]
pub fn active_section<'a>(sections: &'a [(String, Span)], y: f64) -> Option<&'a str> {
    sections.iter().find(|(_, span)| span.contains(y)).map(|(id, _)| id.as_str())
}

/// Recompute which nav link is highlighted. Returns the winning section id.
///
/// When no section contains `scroll_y + look_ahead` the current highlight
/// is left as it is.
pub fn track_active<P: Page>(
    page: &P,
    section_selector: &str,
    nav_link_selector: &str,
    look_ahead: f64,
) -> Result<Option<String>, FolioError> {
    let sections = page
        .query_all(section_selector)?
        .into_iter()
        .filter_map(|node| {
            let id = page.attribute(&node, "id")?;
            Some((id, page.span(&node)))
        })
        .collect::<Vec<_>>();
    let y = page.scroll_y()? + look_ahead;
    let Some(winner) = active_section(&sections, y) else {
        return Ok(None);
    };

    let links = page.query_all(nav_link_selector)?;
    for link in &links {
        page.remove_class(link, ACTIVE_CLASS)?;
    }
    let wanted = format!("#{winner}");
    if let Some(link) = links.iter().find(|l| page.attribute(l, "href").as_deref() == Some(wanted.as_str())) {
        page.add_class(link, ACTIVE_CLASS)?;
    }
    Ok(Some(winner.to_owned()))
}

// =============================================================================
// NAVBAR SHADOW
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    Flat,
    Elevated,
}

impl Shadow {
    /// Elevated strictly above `threshold`.
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold { Self::Elevated } else { Self::Flat }
    }

    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Flat => SHADOW_FLAT,
            Self::Elevated => SHADOW_ELEVATED,
        }
    }
}

pub fn update_shadow<P: Page>(page: &P, navbar: &P::Node, threshold: f64) -> Result<Shadow, FolioError> {
    let shadow = Shadow::for_offset(page.scroll_y()?, threshold);
    page.set_style(navbar, "box-shadow", shadow.css())?;
    Ok(shadow)
}
