//! Interfaces to the live page and to preference storage.
//!
//! The controller never touches browser globals directly. Everything it reads
//! or mutates goes through [`Page`] and [`PreferenceStore`], which the `web`
//! module implements over web-sys and tests implement in memory.
//!
//! Both traits take `&self` for mutations: the DOM and local storage are
//! shared, interior-mutable resources owned by the host, not by us.

use crate::error::FolioError;

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether `y` falls in the half-open range `[top, top + height)`.
    #[must_use]
    pub fn contains(self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Key-value preference storage (local storage in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// Query and mutation surface of the page.
///
/// Query results are snapshots taken at call time; re-query to observe
/// later DOM changes.
pub trait Page {
    /// Opaque element handle.
    type Node: Clone + PartialEq + std::fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>, FolioError>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Attribute on the document element (`<html>`).
    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), FolioError>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str) -> Result<(), FolioError>;
    fn remove_class(&self, node: &Self::Node, class: &str) -> Result<(), FolioError>;
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> Result<bool, FolioError>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), FolioError>;
    fn span(&self, node: &Self::Node) -> Span;

    fn scroll_y(&self) -> Result<f64, FolioError>;
    /// Smooth-scroll so the top of `node` aligns with the top of the viewport.
    fn scroll_into_view(&self, node: &Self::Node) -> Result<(), FolioError>;

    /// Show a blocking notification.
    fn alert(&self, message: &str) -> Result<(), FolioError>;
}
