use std::io;

/// Result type alias for share-link operations that can fail.
pub type Result<T> = std::result::Result<T, LinkError>;

/// Errors raised by the configurable surface of the crate.
///
/// Encoding, decoding and link building never fail; only loading a
/// [`LinkPolicy`](crate::policy::LinkPolicy) and parsing view names do.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Failed to parse link policy: {0}")]
    PolicyParse(#[from] toml::de::Error),

    #[error("Invalid link policy: {0}")]
    InvalidPolicy(String),

    #[error("Unknown view name: '{0}' (expected 'brother' or 'sister')")]
    UnknownView(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
