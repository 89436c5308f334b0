use chromiumoxide::error::CdpError;
use thiserror::Error;

/// Everything that can go wrong while talking to the portal.
///
/// Extraction itself never appears here: a page with no data for the
/// requested period yields an empty-shaped record, not an error.
#[derive(Debug, Error)]
pub enum SchoolSoftError {
    #[error("invalid username or password, or an unknown error occurred (landed on {url:?})")]
    InvalidCredentials { url: String },
    #[error("user is not logged in")]
    NotLoggedIn,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to load {url}")]
    Navigation {
        url: String,
        #[source]
        source: CdpError,
    },
    #[error("failed to launch the browser")]
    Browser(#[source] CdpError),
    #[error("invalid browser configuration: {0}")]
    BrowserConfig(String),
}

/// Rejected before any browser work is attempted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("password must not be empty")]
    EmptyPassword,
}
