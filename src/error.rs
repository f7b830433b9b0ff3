use thiserror::Error;

/// Errors produced by credential resolution, argument validation, and the
/// Reddit client boundary.
///
/// Missing mandatory fields are carried structurally so the CLI layer can
/// format them as flags without re-parsing a message string.
#[derive(Error, Debug)]
pub enum AggregatorError {
    /// Mandatory credential fields absent after resolution, in canonical
    /// order: client_id, client_secret, username, password.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A value-validation failure other than missing credentials.
    #[error("{0}")]
    Config(String),

    /// Any failure surfaced by the external Reddit client.
    #[error("{0}")]
    Client(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<roux::util::RouxError> for AggregatorError {
    fn from(err: roux::util::RouxError) -> Self {
        Self::Client(err.to_string())
    }
}
