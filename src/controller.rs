//! Page controller: boot sequence and event dispatch.
//!
//! ARCHITECTURE
//! ============
//! `Controller` owns the injected page and preference store plus the handles
//! of the elements every handler needs. It is generic over both so the whole
//! flow runs against in-memory fakes in tests; the `web` module instantiates
//! it with web-sys types and forwards real events to [`Controller::dispatch`].
//!
//! Handlers share nothing but the page. Each dispatch reads what it needs
//! from the DOM, writes its result back, and returns.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::bindings::{self, Binding, EventContext, Handler, Outcome};
use crate::config::PageConfig;
use crate::error::FolioError;
use crate::page::{Page, PreferenceStore};
use crate::theme::Theme;
use crate::{fade, links, menu, scroll, theme};

/// Result of [`Controller::start`].
#[derive(Debug)]
pub struct Startup<N> {
    pub theme: Theme,
    pub bindings: Vec<Binding<N>>,
    /// Nodes the host must hand to its intersection watcher.
    pub fade_targets: Vec<N>,
}

pub struct Controller<P: Page, S: PreferenceStore> {
    page: P,
    store: S,
    config: PageConfig,
    theme_toggle: P::Node,
    menu_button: P::Node,
    menu: P::Node,
    navbar: P::Node,
}

impl<P: Page, S: PreferenceStore> Controller<P, S> {
    /// Resolve the required elements. Fails if any is missing from the markup.
    pub fn new(page: P, store: S, config: PageConfig) -> Result<Self, FolioError> {
        let require = |id: &str| page.element_by_id(id).ok_or_else(|| FolioError::missing(id));
        let theme_toggle = require(&config.theme_toggle_id)?;
        let menu_button = require(&config.menu_button_id)?;
        let menu = require(&config.menu_id)?;
        let navbar = require(&config.navbar_id)?;
        Ok(Self { page, store, config, theme_toggle, menu_button, menu, navbar })
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Apply the stored theme, build the bindings table, highlight the
    /// current section and hide the fade targets.
    pub fn start(&self) -> Result<Startup<P::Node>, FolioError> {
        let theme = theme::init(&self.page, &self.store, &self.config.storage_key, self.config.default_theme)?;
        let bindings = bindings::table(&self.page, &self.config, &self.theme_toggle, &self.menu_button)?;
        self.track_active()?;
        let fade_targets = fade::prepare(&self.page, &self.config.fade_selector)?;
        log::info!(
            "folio started: theme={theme}, {} bindings, {} fade targets",
            bindings.len(),
            fade_targets.len()
        );
        Ok(Startup { theme, bindings, fade_targets })
    }

    /// Run one handler for a fired event.
    pub fn dispatch(&self, handler: Handler, ctx: &EventContext<P::Node>) -> Result<Outcome, FolioError> {
        match handler {
            Handler::ToggleTheme => {
                theme::toggle(&self.page, &self.store, &self.config.storage_key)?;
            }
            Handler::ToggleMenu => {
                let open = menu::toggle(&self.page, &self.menu_button, &self.menu)?;
                log::debug!("menu open={open}");
            }
            Handler::CloseMenu => menu::close(&self.page, &self.menu_button, &self.menu)?,
            Handler::CloseMenuOnOutsideClick => {
                menu::close_on_outside_click(&self.page, &self.menu_button, &self.menu, ctx.target.as_ref())?;
            }
            Handler::SmoothScroll => {
                if let Some(anchor) = &ctx.current {
                    scroll::smooth_scroll(&self.page, anchor)?;
                }
                return Ok(Outcome::PREVENT);
            }
            Handler::TrackActiveSection => {
                self.track_active()?;
            }
            Handler::UpdateNavbarShadow => {
                scroll::update_shadow(&self.page, &self.navbar, self.config.shadow_threshold)?;
            }
            Handler::GuardPlaceholder => {
                // The href may have been filled in since the table was built.
                let href = ctx.current.as_ref().and_then(|link| self.page.attribute(link, "href"));
                if ctx.current.is_none() || links::is_placeholder(href.as_deref()) {
                    links::warn_placeholder(&self.page, &self.config.placeholder_message)?;
                    return Ok(Outcome::PREVENT);
                }
            }
        }
        Ok(Outcome::PROCEED)
    }

    /// Forward one intersection entry to the fade-in logic.
    pub fn on_intersect(&self, node: &P::Node, intersecting: bool) -> Result<bool, FolioError> {
        fade::reveal(&self.page, node, intersecting)
    }

    fn track_active(&self) -> Result<Option<String>, FolioError> {
        scroll::track_active(
            &self.page,
            &self.config.section_selector,
            &self.config.nav_link_selector,
            self.config.look_ahead,
        )
    }
}
