use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Key file unreadable or the token endpoint rejected the assertion.
    #[error("credential error: {0}")]
    Credential(String),

    /// Key file could not provide a project id.
    #[error("config error: {0}")]
    Config(String),

    /// Message template missing or malformed.
    #[error("template error: {0}")]
    Template(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Writing the report to stdout failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn credential(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Error::Credential(format!("{}: {}", path.display(), reason))
    }

    pub(crate) fn config(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Error::Config(format!("{}: {}", path.display(), reason))
    }

    pub(crate) fn template(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Error::Template(format!("{}: {}", path.display(), reason))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
