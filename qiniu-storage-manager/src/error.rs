/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use http::StatusCode;
use serde::Deserialize;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// Every fallible operation reports exactly one [`ErrorKind`]; the source
/// chain carries the human-readable detail. Callers branch on
/// [`Error::kind`] and display the chain for diagnostics.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of storage management errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues detected before any request is sent
    /// (malformed bucket name, unknown or missing zone)
    InputInvalid,

    /// The service rejected the supplied credential
    AuthenticationFailed,

    /// The request conflicts with existing state (e.g. the bucket name is
    /// already taken)
    Conflict,

    /// The target bucket does not exist
    NotFound,

    /// A network, timeout, or service-side failure prevented the request
    /// from completing
    TransportFailed,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an
    /// arbitrary error source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::AuthenticationFailed => write!(f, "authentication failed"),
            ErrorKind::Conflict => write!(f, "conflict with existing state"),
            ErrorKind::NotFound => write!(f, "bucket not found"),
            ErrorKind::TransportFailed => write!(f, "transport failed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<crate::http::TransportError> for Error {
    fn from(value: crate::http::TransportError) -> Self {
        Self::new(ErrorKind::TransportFailed, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

/// Failure response returned by the storage service.
#[derive(Debug)]
struct ServiceFailure {
    status: u16,
    message: String,
}

impl fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service responded with status {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ServiceFailure {}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Maps a non-success service response onto the error taxonomy.
///
/// The service reports management failures with extended status codes:
/// 612/631 for a missing bucket or entry, 614 for a name that already
/// exists, and 630 when the account holds too many buckets.
pub(crate) fn from_api_response(status: StatusCode, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());

    let kind = match status.as_u16() {
        400 => ErrorKind::InputInvalid,
        401 | 403 => ErrorKind::AuthenticationFailed,
        612 | 631 => ErrorKind::NotFound,
        614 | 630 => ErrorKind::Conflict,
        _ => ErrorKind::TransportFailed,
    };

    Error::new(
        kind,
        ServiceFailure {
            status: status.as_u16(),
            message,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn test_status_code_classification() {
        let cases = [
            (400, ErrorKind::InputInvalid),
            (401, ErrorKind::AuthenticationFailed),
            (403, ErrorKind::AuthenticationFailed),
            (612, ErrorKind::NotFound),
            (614, ErrorKind::Conflict),
            (630, ErrorKind::Conflict),
            (631, ErrorKind::NotFound),
            (500, ErrorKind::TransportFailed),
            (599, ErrorKind::TransportFailed),
        ];
        for (code, kind) in cases {
            let err = from_api_response(status(code), b"{\"error\":\"detail\"}");
            assert_eq!(err.kind(), &kind, "status {code}");
        }
    }

    #[test]
    fn test_error_body_detail_is_preserved() {
        let err = from_api_response(status(631), br#"{"error":"no such bucket"}"#);
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("no such bucket"));
        assert!(source.to_string().contains("631"));
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_raw_text() {
        let err = from_api_response(status(599), b"bad gateway");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_display_matches_kind() {
        let err = invalid_input("bucket name must not be empty");
        assert_eq!(err.to_string(), "invalid input");
    }
}
