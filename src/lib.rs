//! Page controller for a static portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! small amount of behavior the page needs on top of its markup: theme
//! switching, the mobile menu, in-page smooth scrolling, active-link tracking,
//! the navbar shadow, card fade-ins and the placeholder-link guard.
//!
//! All logic is written against the [`page::Page`] and
//! [`page::PreferenceStore`] traits so it can be tested without a browser. The
//! [`web`] module (feature `browser`) supplies the web-sys implementations and
//! wires the [`bindings`] table to real event listeners.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Boot sequence and event dispatch |
//! | [`bindings`] | Handler registration table |
//! | [`page`] | DOM and storage interfaces |
//! | [`theme`] | Light/dark preference |
//! | [`menu`] | Mobile menu open/close |
//! | [`scroll`] | Smooth scroll, active section, navbar shadow |
//! | [`fade`] | Fade-in preparation and reveal |
//! | [`links`] | Placeholder-link guard |
//! | [`banner`] | Console welcome lines |
//! | [`config`] | Element ids, selectors, thresholds |
//! | [`consts`] | Shared literal values |
//! | [`error`] | Crate error type |
//! | [`util`] | Year lookup and debounce |

pub mod banner;
pub mod bindings;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod fade;
pub mod links;
pub mod menu;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod util;
#[cfg(feature = "browser")]
pub mod web;
