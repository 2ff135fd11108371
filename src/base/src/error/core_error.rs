// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{InvalidParameters, PathError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by all functions in the action crates.
///
/// Errors come from multiple sources. The caller may supply parameters that
/// cannot be turned into a request, such as an empty identifier or a field
/// that is not valid for the chosen variant. The request payload may fail to
/// serialize, the executor may report a transport problem, or the response
/// may fail to deserialize.
///
/// Most applications will just return the error or log it. Applications that
/// need to interrogate the error can use the predicates, and query the
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use discord_actions_base::error::Error;
/// match example_function() {
///     Err(e) if e.is_invalid_parameters() => { println!("fix the parameters {e}"); },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::timeout("simulated"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Cannot build the request path.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use discord_actions_base::error::{Error, PathError};
    /// let error = Error::binding(PathError::EmptySegment { index: 1, after: Some("channels".into()) });
    /// assert!(error.is_binding());
    /// assert!(error.source().is_some());
    /// ```
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request path could not be built.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. An identifier
    /// was left empty, or a user-controlled value containing `/`, `?`, or `#`
    /// was used as a path segment without encoding it. Use
    /// [as_inner][Error::as_inner] with [PathError] to find the position of
    /// the problematic segment.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// The parameters have an invalid shape for the operation.
    ///
    /// # Example
    /// ```
    /// use discord_actions_base::error::{Error, InvalidParameters};
    /// let error = Error::invalid_parameters(InvalidParameters::MutuallyExclusive {
    ///     first: "before",
    ///     second: "after",
    /// });
    /// assert!(error.is_invalid_parameters());
    /// ```
    pub fn invalid_parameters(source: InvalidParameters) -> Self {
        Self {
            kind: ErrorKind::InvalidParameters,
            source: Some(source.into()),
        }
    }

    /// If true, a field was supplied that is not valid for the selected
    /// variant, or more than one field in a mutually exclusive group was set.
    ///
    /// This error is detected before any request is built. It is never
    /// transient: retrying the same call with the same parameters fails again.
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(&self.kind, ErrorKind::InvalidParameters)
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use discord_actions_base::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before the attempt timeout.
    ///
    /// Note that the request may or may not have started, and it may or may
    /// not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request payload could not be serialized.
    ///
    /// The serialization is deterministic, this error will happen again on
    /// future attempts with the same input data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is requesting a typed response for an operation
    /// that returns a different shape. Use [serde_json::Value] as the response
    /// type to inspect the payload.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// A problem reported by the transport layer, with a full HTTP response.
    ///
    /// # Example
    /// ```
    /// use discord_actions_base::error::Error;
    /// let error = Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"Unknown Channel"));
    /// assert_eq!(error.http_status_code(), Some(404));
    /// assert!(error.is_transport());
    /// ```
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include a broken connection after the request is sent.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport(Box::default()),
            source: Some(source.into()),
        }
    }

    /// If true, the transport failed without a full HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// If true, the executor reported a transport problem.
    ///
    /// The HTTP status code, headers, and payload are available via
    /// [http_status_code][Error::http_status_code],
    /// [http_headers][Error::http_headers], and
    /// [http_payload][Error::http_payload] when the service returned a
    /// response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// An error that does not fit any other kind.
    ///
    /// Executors may use this to report problems outside the request and
    /// response flow, for example, a rate limiter that was shut down.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// Returns the source as a concrete type, if it has that type.
    ///
    /// # Example
    /// ```
    /// use discord_actions_base::error::{Error, PathError};
    /// let error = Error::binding(PathError::EmptySegment { index: 1, after: None });
    /// let inner = error.as_inner::<PathError>();
    /// assert!(matches!(inner, Some(PathError::EmptySegment { index: 1, .. })));
    /// ```
    pub fn as_inner<T: StdError + 'static>(&self) -> Option<&T> {
        self.source
            .as_ref()
            .and_then(|e| e.as_ref().downcast_ref::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request path: {e}")
            }
            (ErrorKind::InvalidParameters, Some(e)) => {
                write!(f, "the request parameters have an invalid shape: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the attempt timeout {e}")
            }
            (ErrorKind::Transport(details), source) => details.display(source.as_ref(), f),
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

impl From<PathError> for Error {
    fn from(value: PathError) -> Self {
        Self::binding(value)
    }
}

impl From<InvalidParameters> for Error {
    fn from(value: InvalidParameters) -> Self {
        Self::invalid_parameters(value)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    InvalidParameters,
    Serialization,
    Deserialization,
    Timeout,
    Transport(Box<TransportDetails>),
    Other,
}

#[derive(Debug, Default)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&BoxError>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self.status_code, &self.payload) {
            (_, Some(code), Some(payload)) => write!(
                f,
                "the HTTP transport reports a [{code}] error: {}",
                String::from_utf8_lossy(payload)
            ),
            (_, Some(code), None) => write!(f, "the HTTP transport reports a [{code}] error"),
            (Some(source), None, _) => write!(f, "the transport reports an error: {source}"),
            (None, None, _) => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn binding() {
        let e = Error::binding(PathError::EmptySegment {
            index: 1,
            after: Some("channels".into()),
        });
        assert!(e.is_binding(), "{e:?}");
        assert!(!e.is_invalid_parameters(), "{e:?}");
        assert!(e.to_string().contains("after `channels`"), "{e}");
        assert!(e.source().is_some(), "{e:?}");
        assert_eq!(
            e.as_inner::<PathError>(),
            Some(&PathError::EmptySegment {
                index: 1,
                after: Some("channels".into())
            })
        );
    }

    #[test]
    fn invalid_parameters() {
        let e: Error = InvalidParameters::IllegalField {
            field: "topic".into(),
            variant: "voice",
        }
        .into();
        assert!(e.is_invalid_parameters(), "{e:?}");
        assert!(!e.is_binding(), "{e:?}");
        assert!(e.to_string().contains("`topic`"), "{e}");
        assert!(
            matches!(
                e.as_inner::<InvalidParameters>(),
                Some(InvalidParameters::IllegalField { field, variant: "voice" }) if field == "topic"
            ),
            "{e:?}"
        );
    }

    #[test_case(Error::ser("test"), |e: &Error| e.is_serialization())]
    #[test_case(Error::deser("test"), |e: &Error| e.is_deserialization())]
    #[test_case(Error::timeout("test"), |e: &Error| e.is_timeout())]
    #[test_case(Error::io("test"), |e: &Error| e.is_io() && e.is_transport())]
    #[test_case(Error::other("test"), |e: &Error| !e.is_transport())]
    fn predicates(e: Error, check: fn(&Error) -> bool) {
        assert!(check(&e), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");
        assert!(e.to_string().contains("test"), "{e}");
        assert_eq!(e.http_status_code(), None, "{e:?}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-bucket", "abc".parse().unwrap());
        let e = Error::http(404, headers, bytes::Bytes::from_static(b"Unknown Channel"));
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_io(), "{e:?}");
        assert_eq!(e.http_status_code(), Some(404));
        assert_eq!(
            e.http_headers().and_then(|h| h.get("x-ratelimit-bucket")),
            Some(&http::HeaderValue::from_static("abc"))
        );
        assert_eq!(
            e.http_payload(),
            Some(&bytes::Bytes::from_static(b"Unknown Channel"))
        );
        assert!(e.to_string().contains("[404]"), "{e}");
        assert!(e.source().is_none(), "{e:?}");
    }
}
