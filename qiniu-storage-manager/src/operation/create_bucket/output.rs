/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for creating a bucket
///
/// Creation returns no data beyond success; the type exists so the
/// operation can grow fields without breaking callers.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct CreateBucketOutput {}

impl CreateBucketOutput {
    /// Creates a new builder-style object to manufacture [`CreateBucketOutput`](crate::operation::create_bucket::CreateBucketOutput).
    pub fn builder() -> CreateBucketOutputBuilder {
        CreateBucketOutputBuilder::default()
    }
}

/// A builder for [`CreateBucketOutput`](crate::operation::create_bucket::CreateBucketOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct CreateBucketOutputBuilder {}

impl CreateBucketOutputBuilder {
    /// Consume the builder and return the output
    pub fn build(self) -> CreateBucketOutput {
        CreateBucketOutput {}
    }
}
