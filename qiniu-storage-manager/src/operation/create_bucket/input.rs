/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types::{self, Zone};

/// Input type for creating a bucket
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct CreateBucketInput {
    /// Name of the bucket to create, unique within the account namespace.
    pub bucket: Option<String>,

    /// Zone the bucket is created in, fixed for the bucket's lifetime.
    /// Falls back to the configured default zone when unset.
    pub zone: Option<Zone>,
}

impl CreateBucketInput {
    /// Creates a new builder-style object to manufacture [`CreateBucketInput`](crate::operation::create_bucket::CreateBucketInput).
    pub fn builder() -> CreateBucketInputBuilder {
        CreateBucketInputBuilder::default()
    }

    /// Name of the bucket to create.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Zone the bucket is created in.
    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }
}

/// A builder for [`CreateBucketInput`](crate::operation::create_bucket::CreateBucketInput).
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CreateBucketInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) zone: Option<Zone>,
}

impl CreateBucketInputBuilder {
    /// Set the name of the bucket to create.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the name of the bucket to create.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The name of the bucket to create.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the zone the bucket is created in.
    pub fn zone(mut self, input: Zone) -> Self {
        self.zone = Some(input);
        self
    }

    /// Set the zone the bucket is created in.
    pub fn set_zone(mut self, input: Option<Zone>) -> Self {
        self.zone = input;
        self
    }

    /// The zone the bucket is created in.
    pub fn get_zone(&self) -> &Option<Zone> {
        &self.zone
    }

    /// Consumes the builder and constructs a [`CreateBucketInput`](crate::operation::create_bucket::CreateBucketInput).
    ///
    /// The bucket name is validated against the service naming rules here,
    /// before any request is sent.
    pub fn build(self) -> Result<CreateBucketInput, Error> {
        let bucket = self
            .bucket
            .ok_or_else(|| error::invalid_input("a bucket name is required"))?;
        types::validate_bucket_name(&bucket)?;

        Ok(CreateBucketInput {
            bucket: Some(bucket),
            zone: self.zone,
        })
    }
}
