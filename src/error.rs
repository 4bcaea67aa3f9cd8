// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
    Gui(String),
}

/// Classified outcome of a failed gallery page fetch.
///
/// Every failure the gallery client can hit is folded into one of these four
/// kinds so the load controller always receives a value it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure: DNS, timeout, connection reset, or a request that
    /// could not be built at all.
    Network(String),

    /// The server answered with a non-2xx status.
    Server(u16),

    /// The server answered successfully but the page held no items.
    Empty,

    /// The body did not match the expected envelope shape.
    Decode(String),
}

impl FetchError {
    /// Returns the i18n message key for this error kind.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "gallery-error-network",
            FetchError::Server(_) => "gallery-error-server",
            FetchError::Empty | FetchError::Decode(_) => "gallery-error-no-data",
        }
    }

    /// Human readable message shown in the failed state. Never empty.
    ///
    /// `Decode` deliberately reads the same as `Empty`: both mean there is
    /// nothing to show. The decode detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(detail) if detail.trim().is_empty() => {
                "network error: unknown".to_string()
            }
            FetchError::Network(detail) => format!("network error: {detail}"),
            FetchError::Server(status) => format!("server error: {status}"),
            FetchError::Empty | FetchError::Decode(_) => "no data available".to_string(),
        }
    }

    /// Maps a `reqwest` failure onto the transport bucket.
    ///
    /// Timeouts collapse to the bare word `timeout` so the message stays
    /// stable across platforms and TLS backends.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Network("timeout".to_string());
        }
        if err.is_connect() {
            return FetchError::Network(format!("connection failed: {}", root_cause(err)));
        }
        if let Some(status) = err.status() {
            return FetchError::Server(status.as_u16());
        }
        FetchError::Network(root_cause(err))
    }
}

/// Walks the source chain and returns the innermost message, which for
/// `reqwest` is usually the actionable one (e.g. "dns error").
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    redact(&current.to_string())
}

const SERVICE_KEY_PARAM: &str = "serviceKey=";

/// Masks every `serviceKey` query value in a message, raw or percent-encoded.
pub(crate) fn redact(message: &str) -> String {
    let mut redacted = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(index) = rest.find(SERVICE_KEY_PARAM) {
        let value_start = index + SERVICE_KEY_PARAM.len();
        redacted.push_str(&rest[..value_start]);
        redacted.push_str("<redacted>");
        rest = &rest[value_start..];
        let value_end = rest
            .find(|c: char| c == '&' || c == '#' || c == ')' || c == '"' || c.is_whitespace())
            .unwrap_or(rest.len());
        rest = &rest[value_end..];
    }
    redacted.push_str(rest);
    redacted
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(detail) => write!(f, "Network error: {}", detail),
            FetchError::Server(status) => write!(f, "Server error: HTTP {}", status),
            FetchError::Empty => write!(f, "Response contained no items"),
            FetchError::Decode(detail) => write!(f, "Malformed response: {}", detail),
        }
    }
}

impl std::error::Error for FetchError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
