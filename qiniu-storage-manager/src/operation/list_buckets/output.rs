/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for listing bucket names
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ListBucketsOutput {
    /// Every bucket name owned by the requesting credential, in the order
    /// the service delivered them. The order is stable for a single call
    /// but otherwise unspecified.
    pub bucket_names: Vec<String>,
}

impl ListBucketsOutput {
    /// Creates a new builder-style object to manufacture [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
    pub fn builder() -> ListBucketsOutputBuilder {
        ListBucketsOutputBuilder::default()
    }

    /// The bucket names owned by the requesting credential.
    ///
    /// Indexing past the end of the slice yields `None` from
    /// [`slice::get`]; the container is plainly owned and freed when the
    /// output goes out of scope.
    pub fn bucket_names(&self) -> &[String] {
        &self.bucket_names
    }
}

/// A builder for [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListBucketsOutputBuilder {
    pub(crate) bucket_names: Vec<String>,
}

impl ListBucketsOutputBuilder {
    /// Append a bucket name.
    ///
    /// To override the contents of this collection use
    /// [`set_bucket_names`](Self::set_bucket_names)
    pub fn bucket_name(mut self, input: impl Into<String>) -> Self {
        self.bucket_names.push(input.into());
        self
    }

    /// The full list of bucket names.
    pub fn set_bucket_names(mut self, input: Vec<String>) -> Self {
        self.bucket_names = input;
        self
    }

    /// The full list of bucket names.
    pub fn get_bucket_names(&self) -> &[String] {
        &self.bucket_names
    }

    /// Consume the builder and return the output
    pub fn build(self) -> ListBucketsOutput {
        ListBucketsOutput {
            bucket_names: self.bucket_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListBucketsOutput;

    #[test]
    fn test_indexing_is_bounds_checked() {
        let output = ListBucketsOutput::builder()
            .bucket_name("first")
            .bucket_name("second")
            .build();

        let names = output.bucket_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names.get(0).map(String::as_str), Some("first"));
        assert_eq!(names.get(1).map(String::as_str), Some("second"));
        assert_eq!(names.get(2), None);
    }
}
