//! Error types for the web-service client.

use geonames_types::FieldError;
use thiserror::Error;

/// Numeric error code reported by the web service.
///
/// The associated constants cover the codes the service documents; any other
/// value is carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// Authorization exception, e.g. an unknown or disabled username.
    pub const AUTHORIZATION_EXCEPTION: Self = Self(10);
    /// Record does not exist.
    pub const RECORD_DOES_NOT_EXIST: Self = Self(11);
    /// Other error.
    pub const OTHER_ERROR: Self = Self(12);
    /// Database timeout.
    pub const DATABASE_TIMEOUT: Self = Self(13);
    /// Invalid parameter.
    pub const INVALID_PARAMETER: Self = Self(14);
    /// No result found.
    pub const NO_RESULT_FOUND: Self = Self(15);
    /// Duplicate exception.
    pub const DUPLICATE_EXCEPTION: Self = Self(16);
    /// Postal code not found.
    pub const POSTAL_CODE_NOT_FOUND: Self = Self(17);
    /// Daily limit of credits exceeded.
    pub const DAILY_LIMIT_EXCEEDED: Self = Self(18);
    /// Hourly limit of credits exceeded.
    pub const HOURLY_LIMIT_EXCEEDED: Self = Self(19);
    /// Weekly limit of credits exceeded.
    pub const WEEKLY_LIMIT_EXCEEDED: Self = Self(20);
    /// Invalid input.
    pub const INVALID_INPUT: Self = Self(21);
    /// Server overloaded exception.
    pub const SERVER_OVERLOADED: Self = Self(22);
    /// Service not implemented.
    pub const SERVICE_NOT_IMPLEMENTED: Self = Self(23);
    /// Radius too large.
    pub const RADIUS_TOO_LARGE: Self = Self(24);
    /// `maxRows` too large.
    pub const MAX_ROWS_TOO_LARGE: Self = Self(27);

    /// Returns the service's description of a documented code.
    #[must_use]
    pub const fn description(&self) -> Option<&'static str> {
        match self.0 {
            10 => Some("authorization exception"),
            11 => Some("record does not exist"),
            12 => Some("other error"),
            13 => Some("database timeout"),
            14 => Some("invalid parameter"),
            15 => Some("no result found"),
            16 => Some("duplicate exception"),
            17 => Some("postal code not found"),
            18 => Some("daily limit of credits exceeded"),
            19 => Some("hourly limit of credits exceeded"),
            20 => Some("weekly limit of credits exceeded"),
            21 => Some("invalid input"),
            22 => Some("server overloaded exception"),
            23 => Some("service not implemented"),
            24 => Some("radius too large"),
            27 => Some("maxRows too large"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// An error response from the web service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("got error response => code: {code}, message: {message:?}")]
pub struct ServiceError {
    code: ErrorCode,
    message: String,
}

impl ServiceError {
    /// Creates a new service error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns the service error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the message sent by the service.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the error carries `code`.
    #[must_use]
    pub const fn has_code(&self, code: ErrorCode) -> bool {
        self.code.0 == code.0
    }
}

/// A response body could not be turned into a result.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body is not the JSON shape the endpoint answers with.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A wire value failed to parse.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Terminal error of a web-service call.
#[derive(Error, Debug)]
pub enum WebError {
    /// The HTTP request or body transfer failed.
    #[error("send request => {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("decode response => {0}")]
    Decode(#[from] DecodeError),

    /// The service answered with an error object.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The cancellation token tripped before the response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl WebError {
    /// Returns the service error, if the service rejected the request.
    #[must_use]
    pub const fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the call ended because its token was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(err))
    }
}

impl From<FieldError> for WebError {
    fn from(err: FieldError) -> Self {
        Self::Decode(DecodeError::Field(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::new(ErrorCode(10), "user does not exist.");
        assert_eq!(
            err.to_string(),
            r#"got error response => code: 10, message: "user does not exist.""#
        );
        assert!(err.has_code(ErrorCode::AUTHORIZATION_EXCEPTION));
        assert!(!err.has_code(ErrorCode::NO_RESULT_FOUND));
        assert_eq!(err.message(), "user does not exist.");
    }

    #[test]
    fn test_service_error_is_matchable_through_web_error() {
        let err = WebError::from(ServiceError::new(ErrorCode::DAILY_LIMIT_EXCEEDED, "slow down"));
        let service = err.service_error().unwrap();
        assert_eq!(service.code(), ErrorCode(18));
        assert_eq!(err.to_string(), service.to_string());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(ErrorCode(15).description(), Some("no result found"));
        assert_eq!(ErrorCode(27).description(), Some("maxRows too large"));
        assert_eq!(ErrorCode(99).description(), None);
        assert_eq!(ErrorCode(99).to_string(), "99");
    }

    #[test]
    fn test_decode_error_has_stage_prefix() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WebError::from(json);
        assert!(err.to_string().starts_with("decode response => "));
    }
}
