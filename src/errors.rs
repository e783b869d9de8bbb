use std::fmt;

/// The Error
#[derive(Debug)]
pub enum Error {
    /// Input is returned when the invocation parameters are missing a
    /// required field or combine fields in a way that is not allowed, this
    /// is always detected before any request is made to the gateway
    Input(String),
    /// NotFound is returned when a tenant, API, path or operation was
    /// expected to exist exactly once but was absent
    NotFound(String),
    /// Ambiguous is returned when more than one tenant or API matched the
    /// selection criteria, this is an inconsistency in the gateway's data
    /// and not something the caller can correct
    Ambiguous(String),
    /// Upstream is returned when the gateway itself reported a failure for
    /// a request, it carries the status and whatever detail was returned
    Upstream(String),
    /// ParseError is returned when there was an error parsing a url
    ParseError(url::ParseError),
    /// ReqwestError is returned when the request made to the gateway itself fails
    ReqwestError(reqwest::Error),
    /// DocumentError is returned when the endpoint document returned by the
    /// gateway could not be read into the editable model
    DocumentError(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Input(ref msg) => write!(f, "{}", msg),
            Error::NotFound(ref msg) => write!(f, "{}", msg),
            Error::Ambiguous(ref msg) => write!(f, "{}", msg),
            Error::Upstream(ref msg) => write!(f, "{}", msg),
            Error::ParseError(ref cause) => write!(f, "Parse Error: {}", cause),
            Error::ReqwestError(ref cause) => write!(f, "Reqwest Error: {}", cause),
            Error::DocumentError(ref cause) => write!(f, "Document Error: {}", cause),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(cause: url::ParseError) -> Error {
        Error::ParseError(cause)
    }
}
impl From<reqwest::Error> for Error {
    fn from(cause: reqwest::Error) -> Error {
        Error::ReqwestError(cause)
    }
}
impl From<serde_json::Error> for Error {
    fn from(cause: serde_json::Error) -> Error {
        Error::DocumentError(cause)
    }
}
