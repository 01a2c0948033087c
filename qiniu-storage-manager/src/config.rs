/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::http::{self, HttpTransport};
use crate::types::Zone;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for a [`Client`](crate::client::Client)
///
/// A client copies the configuration it is constructed with; mutating a
/// builder afterwards never affects clients that were already built.
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: Url,
    default_zone: Option<Zone>,
    connect_timeout: Duration,
    request_timeout: Duration,
    max_retries: u32,
    http_client: Arc<dyn HttpTransport>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the control-plane endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the zone used for bucket creation when a request does not
    /// name one explicitly.
    pub fn default_zone(&self) -> Option<Zone> {
        self.default_zone
    }

    /// Returns the connection establishment timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the per-request timeout, covering the full round trip.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the number of times a retryable transport failure is retried
    /// before it is surfaced. Service-level rejections are never retried.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// The transport instance that will be used to send requests.
    pub fn http_client(&self) -> &Arc<dyn HttpTransport> {
        &self.http_client
    }
}

impl Default for Config {
    /// Service-standard defaults, identical to `Config::builder().build()`.
    fn default() -> Self {
        Builder::default().build()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    endpoint: Option<Url>,
    default_zone: Option<Zone>,
    connect_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
    max_retries: Option<u32>,
    http_client: Option<Arc<dyn HttpTransport>>,
}

impl Builder {
    /// Override the control-plane endpoint.
    ///
    /// Default is the service's public management host.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the zone to fall back to when a create-bucket request does not
    /// name one explicitly.
    pub fn default_zone(mut self, zone: Zone) -> Self {
        self.default_zone = Some(zone);
        self
    }

    /// Set the connection establishment timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set how many times retryable transport failures are retried.
    /// Default is 3. Zero disables retries entirely.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set an explicit transport to use instead of the built-in HTTP client.
    pub fn http_client(mut self, client: impl HttpTransport + 'static) -> Self {
        self.http_client = Some(Arc::new(client));
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Config {
        let endpoint = self.endpoint.unwrap_or_else(|| {
            Url::parse(crate::DEFAULT_ENDPOINT).expect("default endpoint parses")
        });
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Config {
            http_client: self
                .http_client
                .unwrap_or_else(|| http::default_transport(connect_timeout, request_timeout)),
            endpoint,
            default_zone: self.default_zone,
            connect_timeout,
            request_timeout,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        }
    }
}
