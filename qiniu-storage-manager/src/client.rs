/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::credential::Credential;
use crate::Config;

/// Bucket management client for Qiniu object storage.
///
/// Clients are cheap to construct and clone; construction performs no
/// network I/O, so a credential the service rejects only surfaces on the
/// first operation. Operations are independent requests; a single client
/// may issue any number of them, concurrently or sequentially.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: resolved configuration and
/// the credential requests are signed with.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
    pub(crate) credential: Credential,
}

impl Client {
    /// Creates a new client from an access-key/secret-key pair and a
    /// configuration.
    ///
    /// Never fails: empty or malformed keys are accepted here and rejected
    /// by the service on first use with
    /// [`ErrorKind::AuthenticationFailed`](crate::error::ErrorKind::AuthenticationFailed).
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        config: Config,
    ) -> Client {
        Self::from_credential(Credential::new(access_key, secret_key), config)
    }

    /// Creates a new client from an existing [`Credential`].
    pub fn from_credential(credential: Credential, config: Config) -> Client {
        let handle = Arc::new(Handle { config, credential });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List the names of every bucket owned by the credential.
    ///
    /// Constructs a fluent builder for the
    /// [`ListBuckets`](crate::operation::list_buckets::builders::ListBucketsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qiniu_storage_manager::error::Error;
    ///
    /// async fn print_buckets(client: &qiniu_storage_manager::Client) -> Result<(), Error> {
    ///     let output = client.list_buckets().send().await?;
    ///     for name in output.bucket_names() {
    ///         println!("{name}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_buckets(&self) -> crate::operation::list_buckets::builders::ListBucketsFluentBuilder {
        crate::operation::list_buckets::builders::ListBucketsFluentBuilder::new(self.handle.clone())
    }

    /// Create a new bucket in a geographic zone.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateBucket`](crate::operation::create_bucket::builders::CreateBucketFluentBuilder) operation.
    /// The zone falls back to [`Config::default_zone`] when not set on the
    /// request; creation is not idempotent: repeating a name fails with
    /// [`ErrorKind::Conflict`](crate::error::ErrorKind::Conflict).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qiniu_storage_manager::error::Error;
    /// use qiniu_storage_manager::types::Zone;
    ///
    /// async fn create(client: &qiniu_storage_manager::Client) -> Result<(), Error> {
    ///     client
    ///         .create_bucket()
    ///         .bucket("my-bucket")
    ///         .zone(Zone::Z1)
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn create_bucket(
        &self,
    ) -> crate::operation::create_bucket::builders::CreateBucketFluentBuilder {
        crate::operation::create_bucket::builders::CreateBucketFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Drop an existing bucket.
    ///
    /// Constructs a fluent builder for the
    /// [`DropBucket`](crate::operation::drop_bucket::builders::DropBucketFluentBuilder) operation.
    /// Dropping is not idempotent: a missing bucket fails with
    /// [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound). Callers
    /// that want "drop if present" match on that kind and ignore it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qiniu_storage_manager::error::{Error, ErrorKind};
    ///
    /// async fn drop_if_present(
    ///     client: &qiniu_storage_manager::Client,
    ///     name: &str,
    /// ) -> Result<(), Error> {
    ///     match client.drop_bucket().bucket(name).send().await {
    ///         Ok(_) => Ok(()),
    ///         Err(err) if err.kind() == &ErrorKind::NotFound => Ok(()),
    ///         Err(err) => Err(err),
    ///     }
    /// }
    /// ```
    pub fn drop_bucket(&self) -> crate::operation::drop_bucket::builders::DropBucketFluentBuilder {
        crate::operation::drop_bucket::builders::DropBucketFluentBuilder::new(self.handle.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::Client;

    fn assert_send_sync<T: Send + Sync>() {}

    // A single client handle may be shared across tasks; every operation is
    // an independent request.
    #[test]
    fn test_client_is_send_and_sync() {
        assert_send_sync::<Client>();
    }
}
