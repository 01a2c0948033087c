/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use bytes::Bytes;
use hmac::{Hmac, Mac};
use http::{Method, StatusCode};
use sha1::Sha1;
use url::Url;

use crate::credential::Credential;
use crate::error::BoxError;

type HmacSha1 = Hmac<Sha1>;

/// The boundary between the storage operations and the wire.
///
/// Implementations own request signing and the network round trip; the
/// operations above this trait never touch either. A transport must be
/// reentrant: a single client issues independent operations through one
/// shared transport instance, potentially from multiple tasks.
#[async_trait]
pub trait HttpTransport: fmt::Debug + Send + Sync {
    /// Sends a signed request on behalf of `credential` and returns the
    /// service response, however the service chose to answer.
    ///
    /// Non-2xx responses are **not** transport errors; they are returned as
    /// a [`TransportResponse`] for the operation layer to classify. A
    /// [`TransportError`] means the request never completed (connection
    /// failure, timeout, malformed response stream).
    async fn send(
        &self,
        credential: &Credential,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError>;
}

/// A single control-plane request to be signed and sent by a transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    method: Method,
    url: Url,
    body: Bytes,
}

impl TransportRequest {
    pub(crate) fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: Bytes::new(),
        }
    }

    pub(crate) fn post(url: Url) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Bytes::new(),
        }
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request body, empty for every bucket management operation.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// A response delivered by a transport, successful or not.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    status: StatusCode,
    body: Bytes,
}

impl TransportResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Error raised by a transport when a request could not be completed.
#[derive(Debug)]
pub struct TransportError {
    kind: TransportErrorKind,
    source: BoxError,
}

/// General categories of transport failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TransportErrorKind {
    /// The request or connection timed out
    Timeout,

    /// A connection could not be established
    Connection,

    /// Any other failure the transport could not classify
    Unclassified,
}

impl TransportError {
    /// Creates a new [`TransportError`] from a known kind of error as well
    /// as an arbitrary error source.
    pub fn new<E>(kind: TransportErrorKind, err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`TransportErrorKind`] for this error.
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// Whether retrying the request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            TransportErrorKind::Timeout | TransportErrorKind::Connection
        )
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransportErrorKind::Timeout => write!(f, "request timed out"),
            TransportErrorKind::Connection => write!(f, "connection failed"),
            TransportErrorKind::Unclassified => write!(f, "transport failure"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// The default transport used by a client when not explicitly configured.
pub(crate) fn default_transport(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Arc<dyn HttpTransport> {
    Arc::new(ReqwestTransport::new(connect_timeout, request_timeout))
}

/// Production transport backed by [`reqwest`].
///
/// Applies the service's `QBox` request signature using the per-request
/// credential. The inner client maintains its own connection pool and is
/// safe to share across tasks.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport honoring the given timeouts.
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("default HTTP client");
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        credential: &Credential,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let authorization = sign_request(credential, request.url(), request.body());
        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .header(http::header::AUTHORIZATION, authorization)
            .body(request.body().clone())
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify_reqwest_error)?;
        Ok(TransportResponse::new(status, body))
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connection
    } else {
        TransportErrorKind::Unclassified
    };
    TransportError::new(kind, err)
}

/// Computes the `QBox` authorization header for a management request: the
/// URL-safe base64 HMAC-SHA1 of `path[?query]\n<body>` under the secret key.
fn sign_request(credential: &Credential, url: &Url, body: &[u8]) -> String {
    let mut data = String::from(url.path());
    if let Some(query) = url.query() {
        data.push('?');
        data.push_str(query);
    }
    data.push('\n');

    let mut mac = HmacSha1::new_from_slice(credential.secret_key().as_bytes())
        .expect("HMAC-SHA1 accepts keys of any length");
    mac.update(data.as_bytes());
    mac.update(body);
    let digest = mac.finalize().into_bytes();

    format!("QBox {}:{}", credential.access_key(), URL_SAFE.encode(digest))
}
