/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for bucket creation
pub use input::{CreateBucketInput, CreateBucketInputBuilder};
mod output;
/// Response type for bucket creation
pub use output::{CreateBucketOutput, CreateBucketOutputBuilder};

use std::sync::Arc;

use crate::error::{self, Error};
use crate::http::TransportRequest;

/// Operation struct for creating a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateBucket;

impl CreateBucket {
    /// Execute a single `CreateBucket` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CreateBucketInput,
    ) -> Result<CreateBucketOutput, Error> {
        let bucket = input
            .bucket()
            .ok_or_else(|| error::invalid_input("a bucket name is required"))?;
        // The zone is fixed for the bucket's lifetime, so it must be known
        // before the request goes out.
        let zone = input
            .zone()
            .or(handle.config.default_zone())
            .ok_or_else(|| error::invalid_input("a zone is required to create a bucket"))?;

        let path = format!("/mkbucketv3/{}/region/{}", bucket, zone.region_id());
        let url = crate::operation::request_url(&handle, &path)?;
        crate::operation::dispatch(&handle, TransportRequest::post(url)).await?;

        tracing::debug!(bucket, region = zone.region_id(), "bucket created");
        Ok(CreateBucketOutput::builder().build())
    }
}
