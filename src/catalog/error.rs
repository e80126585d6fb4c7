use thiserror::Error;

/// Fixed message for lookups the catalog rejects, whatever the status.
pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found. Check the spelling and try again.";

/// Errors that can occur during a catalog lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no entry for the requested name.
    #[error("creature not found")]
    NotFound,

    /// Any other non-success response.
    #[error("catalog returned status {status}")]
    Api { status: u16 },

    /// Connection-level failure (DNS, refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Body did not match the expected wire format.
    #[error("parse error: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Message shown on the error panel.
    ///
    /// Unknown names and bad statuses collapse into one fixed string;
    /// transport and parse failures surface their own text verbatim.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::NotFound | CatalogError::Api { .. } => NOT_FOUND_MESSAGE.to_string(),
            CatalogError::Network(message) | CatalogError::Parse(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Parse(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}
