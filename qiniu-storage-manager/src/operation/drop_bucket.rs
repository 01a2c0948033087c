/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for dropping a bucket
pub use input::{DropBucketInput, DropBucketInputBuilder};
mod output;
/// Response type for dropping a bucket
pub use output::{DropBucketOutput, DropBucketOutputBuilder};

use std::sync::Arc;

use crate::error::{self, Error};
use crate::http::TransportRequest;

/// Operation struct for dropping a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct DropBucket;

impl DropBucket {
    /// Execute a single `DropBucket` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DropBucketInput,
    ) -> Result<DropBucketOutput, Error> {
        let bucket = input
            .bucket()
            .ok_or_else(|| error::invalid_input("a bucket name is required"))?;

        let path = format!("/drop/{}", bucket);
        let url = crate::operation::request_url(&handle, &path)?;
        crate::operation::dispatch(&handle, TransportRequest::post(url)).await?;

        tracing::debug!(bucket, "bucket dropped");
        Ok(DropBucketOutput::builder().build())
    }
}
