/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::ListBucketsOutput;

/// Fluent builder for constructing a list-bucket-names request
#[derive(Debug)]
pub struct ListBucketsFluentBuilder {
    handle: Arc<crate::client::Handle>,
}

impl ListBucketsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self { handle }
    }

    /// List every bucket name owned by the credential
    pub async fn send(self) -> Result<ListBucketsOutput, Error> {
        crate::operation::list_buckets::ListBuckets::orchestrate(self.handle).await
    }
}
