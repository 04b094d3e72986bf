//! Error taxonomy.
//!
//! API failures are classified by the `status_code` field of the error
//! envelope the service returns, so every error of a given class is
//! distinguishable by type no matter which endpoint produced it. Bodies
//! that do not parse as an error envelope are surfaced as
//! [`Error::MalformedResponse`] rather than guessed at.

use std::error::Error as StdError;
use std::fmt;

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::ValidationError;
use crate::transport::RequestDescriptor;

/// Boxed transport-level failure (connect, TLS, timeout).
pub type TransportError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
/// Everything known about a failed API call.
pub struct ApiFailure {
    /// The request that was sent.
    pub request: RequestDescriptor,
    /// `status_code` from the error envelope.
    pub status_code: u16,
    /// Machine-readable error code, when the service provides one.
    pub error_code: Option<String>,
    /// Human-readable messages; the wire format allows one or several.
    pub messages: Vec<String>,
    /// Correlation id for support requests.
    pub response_id: Option<Uuid>,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} returned {}",
            self.request.method(),
            self.request.path(),
            self.status_code
        )?;
        if let Some(code) = &self.error_code {
            write!(f, " ({code})")?;
        }
        if !self.messages.is_empty() {
            write!(f, ": {}", self.messages.join("; "))?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The client could not be constructed from the given settings.
    #[error("invalid client configuration: {0}")]
    Configuration(#[source] TransportError),
    /// The request never produced an HTTP response.
    #[error("transport failure for {method} {path}: {source}", method = .request.method(), path = .request.path())]
    Transport {
        request: RequestDescriptor,
        source: TransportError,
    },
    #[error("bad request: {0}")]
    BadRequest(ApiFailure),
    #[error("unauthorized: {0}")]
    Unauthorized(ApiFailure),
    #[error("forbidden: {0}")]
    Forbidden(ApiFailure),
    #[error("not found: {0}")]
    NotFound(ApiFailure),
    #[error("conflict: {0}")]
    Conflict(ApiFailure),
    #[error("locked: {0}")]
    Locked(ApiFailure),
    #[error("too many requests: {0}")]
    TooManyRequests(ApiFailure),
    #[error("internal server error: {0}")]
    InternalServer(ApiFailure),
    /// An error status outside the documented set.
    #[error("unexpected status: {0}")]
    Unexpected(ApiFailure),
    /// The body could not be decoded as the expected shape.
    #[error("malformed response for {method} {path} (HTTP {status}): {reason}", method = .request.method(), path = .request.path())]
    MalformedResponse {
        request: RequestDescriptor,
        status: u16,
        reason: String,
        body: String,
    },
}

impl Error {
    /// The failure details, for any variant that carries an envelope.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::BadRequest(f)
            | Self::Unauthorized(f)
            | Self::Forbidden(f)
            | Self::NotFound(f)
            | Self::Conflict(f)
            | Self::Locked(f)
            | Self::TooManyRequests(f)
            | Self::InternalServer(f)
            | Self::Unexpected(f) => Some(f),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvelopeMessage {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    status_code: u16,
    error_code: Option<String>,
    message: Option<EnvelopeMessage>,
    response_id: Option<Uuid>,
}

/// Classifies a non-2xx response into the error taxonomy.
///
/// Dispatch is on the envelope's own `status_code` field; `http_status` is
/// only reported when the body is not a valid envelope.
pub(crate) fn classify(request: RequestDescriptor, http_status: u16, body: &str) -> Error {
    let envelope: ErrorEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            return Error::MalformedResponse {
                request,
                status: http_status,
                reason: err.to_string(),
                body: body.to_owned(),
            };
        }
    };
    let messages = match envelope.message {
        Some(EnvelopeMessage::One(message)) => vec![message],
        Some(EnvelopeMessage::Many(messages)) => messages,
        None => Vec::new(),
    };
    let failure = ApiFailure {
        request,
        status_code: envelope.status_code,
        error_code: envelope.error_code,
        messages,
        response_id: envelope.response_id,
    };
    match failure.status_code {
        400 => Error::BadRequest(failure),
        401 => Error::Unauthorized(failure),
        403 => Error::Forbidden(failure),
        404 => Error::NotFound(failure),
        409 => Error::Conflict(failure),
        423 => Error::Locked(failure),
        429 => Error::TooManyRequests(failure),
        500 => Error::InternalServer(failure),
        _ => Error::Unexpected(failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport;

    fn descriptor() -> RequestDescriptor {
        transport::servers::get(1)
    }

    fn envelope(status: u16) -> String {
        format!(
            r#"{{"status_code": {status}, "error_code": "err", "message": "boom",
                "response_id": "8f2d7bfc-df69-4e19-87a5-f0f8a5a54a33"}}"#
        )
    }

    #[test]
    fn every_documented_status_maps_to_its_variant() {
        let cases: &[(u16, fn(&Error) -> bool)] = &[
            (400, |e| matches!(e, Error::BadRequest(_))),
            (401, |e| matches!(e, Error::Unauthorized(_))),
            (403, |e| matches!(e, Error::Forbidden(_))),
            (404, |e| matches!(e, Error::NotFound(_))),
            (409, |e| matches!(e, Error::Conflict(_))),
            (423, |e| matches!(e, Error::Locked(_))),
            (429, |e| matches!(e, Error::TooManyRequests(_))),
            (500, |e| matches!(e, Error::InternalServer(_))),
            (418, |e| matches!(e, Error::Unexpected(_))),
            (502, |e| matches!(e, Error::Unexpected(_))),
        ];
        for (status, check) in cases {
            let error = classify(descriptor(), *status, &envelope(*status));
            assert!(check(&error), "status {status} classified as {error:?}");
        }
    }

    #[test]
    fn classification_follows_the_envelope_not_the_http_line() {
        let error = classify(descriptor(), 503, &envelope(404));
        assert!(matches!(error, Error::NotFound(_)));
    }

    #[test]
    fn message_accepts_a_single_string_or_a_list() {
        let one = classify(
            descriptor(),
            400,
            r#"{"status_code": 400, "error_code": "bad_request", "message": "nope"}"#,
        );
        assert_eq!(one.api_failure().unwrap().messages, ["nope"]);

        let many = classify(
            descriptor(),
            400,
            r#"{"status_code": 400, "error_code": "bad_request", "message": ["a", "b"]}"#,
        );
        assert_eq!(many.api_failure().unwrap().messages, ["a", "b"]);

        let none = classify(descriptor(), 400, r#"{"status_code": 400}"#);
        assert!(none.api_failure().unwrap().messages.is_empty());
    }

    #[test]
    fn junk_bodies_become_malformed_response() {
        let error = classify(descriptor(), 502, "<html>Bad Gateway</html>");
        match error {
            Error::MalformedResponse { status, body, .. } => {
                assert_eq!(status, 502);
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn failure_display_names_the_request() {
        let error = classify(descriptor(), 404, &envelope(404));
        let text = error.to_string();
        assert!(text.contains("GET servers/1"), "got: {text}");
        assert!(text.contains("404"), "got: {text}");
        assert!(text.contains("boom"), "got: {text}");
    }
}
