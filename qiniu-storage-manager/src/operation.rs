/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use url::Url;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::http::{TransportRequest, TransportResponse};

/// Types for the list-bucket-names operation
pub mod list_buckets;

/// Types for the create-bucket operation
pub mod create_bucket;

/// Types for the drop-bucket operation
pub mod drop_bucket;

const RETRY_BASE_DELAY: Duration = Duration::from_millis(50);

/// Resolves an operation path against the configured endpoint.
pub(crate) fn request_url(handle: &Handle, path: &str) -> Result<Url, Error> {
    handle
        .config
        .endpoint()
        .join(path)
        .map_err(error::invalid_input)
}

/// Sends one request through the configured transport, retrying retryable
/// transport failures and 5xx responses up to the configured budget.
///
/// Service-level rejections (auth, conflict, not-found, validation) are
/// mapped to an [`Error`] and surfaced immediately, never retried.
pub(crate) async fn dispatch(
    handle: &Handle,
    request: TransportRequest,
) -> Result<TransportResponse, Error> {
    let max_attempts = handle.config.max_retries().saturating_add(1);
    let mut attempt: u32 = 1;
    loop {
        tracing::trace!(
            method = %request.method(),
            url = %request.url(),
            attempt,
            "sending control-plane request"
        );
        match handle
            .config
            .http_client()
            .send(&handle.credential, request.clone())
            .await
        {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) if response.status().is_server_error() && attempt < max_attempts => {
                tracing::debug!(
                    status = response.status().as_u16(),
                    attempt,
                    "server error, retrying"
                );
            }
            Ok(response) => {
                return Err(error::from_api_response(response.status(), response.body()))
            }
            Err(err) if err.is_retryable() && attempt < max_attempts => {
                tracing::debug!(attempt, error = %err, "transport failure, retrying");
            }
            Err(err) => return Err(err.into()),
        }
        tokio::time::sleep(RETRY_BASE_DELAY * attempt).await;
        attempt += 1;
    }
}
