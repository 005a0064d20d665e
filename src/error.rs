//! Crate error type.

/// Errors produced while booting the controller or handling page events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FolioError {
    /// A required element is not present in the markup.
    #[error("missing element: #{id}")]
    MissingElement { id: String },

    /// Local storage is unavailable or rejected a read/write.
    #[error("storage failed: {0}")]
    Storage(String),

    /// The page config block could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl FolioError {
    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }
}
