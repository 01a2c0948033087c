/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{DropBucketInputBuilder, DropBucketOutput};

/// Fluent builder for constructing a drop-bucket request
#[derive(Debug)]
pub struct DropBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DropBucketInputBuilder,
}

impl DropBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Request deletion of the bucket
    pub async fn send(self) -> Result<DropBucketOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::drop_bucket::DropBucket::orchestrate(self.handle, input).await
    }

    /// Set the name of the bucket to drop.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the name of the bucket to drop.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The name of the bucket to drop.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}

impl crate::operation::drop_bucket::input::DropBucketInputBuilder {
    /// Request deletion of a bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DropBucketOutput, Error> {
        let mut fluent_builder = client.drop_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
