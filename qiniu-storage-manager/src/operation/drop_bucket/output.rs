/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for dropping a bucket
///
/// Dropping returns no data beyond success; the type exists so the
/// operation can grow fields without breaking callers.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DropBucketOutput {}

impl DropBucketOutput {
    /// Creates a new builder-style object to manufacture [`DropBucketOutput`](crate::operation::drop_bucket::DropBucketOutput).
    pub fn builder() -> DropBucketOutputBuilder {
        DropBucketOutputBuilder::default()
    }
}

/// A builder for [`DropBucketOutput`](crate::operation::drop_bucket::DropBucketOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DropBucketOutputBuilder {}

impl DropBucketOutputBuilder {
    /// Consume the builder and return the output
    pub fn build(self) -> DropBucketOutput {
        DropBucketOutput {}
    }
}
