//! Handler registration table.
//!
//! Every listener the page needs is described as a [`Binding`]: which event,
//! on which target, runs which [`Handler`]. The table is built once at boot.
//! The browser layer turns each row into a real listener; tests dispatch rows
//! directly through [`crate::controller::Controller::dispatch`].
//!
//! Rows are in registration order, so handlers sharing an event and target
//! fire in table order.

use crate::config::PageConfig;
use crate::error::FolioError;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Scroll,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Scroll => "scroll",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<N> {
    Element(N),
    Document,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    CloseMenuOnOutsideClick,
    SmoothScroll,
    TrackActiveSection,
    UpdateNavbarShadow,
    GuardPlaceholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding<N> {
    pub event: EventKind,
    pub target: Target<N>,
    pub handler: Handler,
}

impl<N> Binding<N> {
    fn new(event: EventKind, target: Target<N>, handler: Handler) -> Self {
        Self { event, target, handler }
    }
}

/// What the host knows about a fired event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventContext<N> {
    /// Element the event originated on (`event.target`).
    pub target: Option<N>,
    /// Element the listener is attached to, for element bindings.
    pub current: Option<N>,
}

impl<N> Default for EventContext<N> {
    fn default() -> Self {
        Self { target: None, current: None }
    }
}

/// What the host must do after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub prevent_default: bool,
}

impl Outcome {
    pub const PROCEED: Self = Self { prevent_default: false };
    pub const PREVENT: Self = Self { prevent_default: true };
}

/// Build the full table against the current markup.
pub fn table<P: Page>(
    page: &P,
    config: &PageConfig,
    theme_toggle: &P::Node,
    menu_button: &P::Node,
) -> Result<Vec<Binding<P::Node>>, FolioError> {
    use EventKind::{Click, Scroll};

    let mut rows = vec![
        Binding::new(Click, Target::Element(theme_toggle.clone()), Handler::ToggleTheme),
        Binding::new(Click, Target::Element(menu_button.clone()), Handler::ToggleMenu),
    ];
    for link in page.query_all(&config.nav_link_selector)? {
        rows.push(Binding::new(Click, Target::Element(link), Handler::CloseMenu));
    }
    rows.push(Binding::new(Click, Target::Document, Handler::CloseMenuOnOutsideClick));
    for anchor in page.query_all(&config.anchor_selector)? {
        rows.push(Binding::new(Click, Target::Element(anchor), Handler::SmoothScroll));
    }
    rows.push(Binding::new(Scroll, Target::Window, Handler::TrackActiveSection));
    rows.push(Binding::new(Scroll, Target::Window, Handler::UpdateNavbarShadow));
    for link in page.query_all(&config.placeholder_selector)? {
        rows.push(Binding::new(Click, Target::Element(link), Handler::GuardPlaceholder));
    }
    Ok(rows)
}
