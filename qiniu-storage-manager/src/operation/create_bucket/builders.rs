/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::Zone;

use super::{CreateBucketInputBuilder, CreateBucketOutput};

/// Fluent builder for constructing a create-bucket request
#[derive(Debug)]
pub struct CreateBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateBucketInputBuilder,
}

impl CreateBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Request creation of the bucket
    pub async fn send(self) -> Result<CreateBucketOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::create_bucket::CreateBucket::orchestrate(self.handle, input).await
    }

    /// Set the name of the bucket to create.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the name of the bucket to create.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The name of the bucket to create.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the zone the bucket is created in.
    pub fn zone(mut self, input: Zone) -> Self {
        self.inner = self.inner.zone(input);
        self
    }

    /// Set the zone the bucket is created in.
    pub fn set_zone(mut self, input: Option<Zone>) -> Self {
        self.inner = self.inner.set_zone(input);
        self
    }

    /// The zone the bucket is created in.
    pub fn get_zone(&self) -> &Option<Zone> {
        self.inner.get_zone()
    }
}

impl crate::operation::create_bucket::input::CreateBucketInputBuilder {
    /// Request creation of a bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<CreateBucketOutput, Error> {
        let mut fluent_builder = client.create_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
