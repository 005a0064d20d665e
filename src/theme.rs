//! Light/dark theme preference.
//!
//! The applied theme lives in the `data-theme` attribute on `<html>`; the
//! persisted copy lives under one local storage key. Toggling reads the
//! attribute, not storage, so the page is the source of truth.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::THEME_ATTRIBUTE;
use crate::error::FolioError;
use crate::page::{Page, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret an applied attribute value. Only `"dark"` counts as dark.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FolioError::Config(format!("unknown theme: {other}"))),
        }
    }
}

/// Read the stored preference and apply it to the page.
///
/// Falls back to `fallback` when nothing is stored or the stored value is not
/// a known theme.
pub fn init<P: Page, S: PreferenceStore>(
    page: &P,
    store: &S,
    key: &str,
    fallback: Theme,
) -> Result<Theme, FolioError> {
    let theme = match store.get(key)? {
        Some(raw) => raw.parse::<Theme>().unwrap_or_else(|_| {
            log::warn!("ignoring stored theme {raw:?}");
            fallback
        }),
        None => fallback,
    };
    page.set_root_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    Ok(theme)
}

/// Flip the applied theme and persist the new value.
pub fn toggle<P: Page, S: PreferenceStore>(page: &P, store: &S, key: &str) -> Result<Theme, FolioError> {
    let current = Theme::from_attribute(page.root_attribute(THEME_ATTRIBUTE).as_deref());
    let next = current.opposite();
    page.set_root_attribute(THEME_ATTRIBUTE, next.as_str())?;
    store.set(key, next.as_str())?;
    log::debug!("theme {current} -> {next}");
    Ok(next)
}
