/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types;

/// Input type for dropping a bucket
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DropBucketInput {
    /// Name of the bucket to drop.
    pub bucket: Option<String>,
}

impl DropBucketInput {
    /// Creates a new builder-style object to manufacture [`DropBucketInput`](crate::operation::drop_bucket::DropBucketInput).
    pub fn builder() -> DropBucketInputBuilder {
        DropBucketInputBuilder::default()
    }

    /// Name of the bucket to drop.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`DropBucketInput`](crate::operation::drop_bucket::DropBucketInput).
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DropBucketInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl DropBucketInputBuilder {
    /// Set the name of the bucket to drop.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the name of the bucket to drop.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The name of the bucket to drop.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`DropBucketInput`](crate::operation::drop_bucket::DropBucketInput).
    pub fn build(self) -> Result<DropBucketInput, Error> {
        let bucket = self
            .bucket
            .ok_or_else(|| error::invalid_input("a bucket name is required"))?;
        types::validate_bucket_name(&bucket)?;

        Ok(DropBucketInput {
            bucket: Some(bucket),
        })
    }
}
