/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod output;
/// Response type for listing bucket names
pub use output::{ListBucketsOutput, ListBucketsOutputBuilder};

use std::sync::Arc;

use crate::error::{Error, ErrorKind};
use crate::http::TransportRequest;

/// Operation struct for listing bucket names
#[derive(Clone, Default, Debug)]
pub(crate) struct ListBuckets;

impl ListBuckets {
    /// Execute a single `ListBuckets` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
    ) -> Result<ListBucketsOutput, Error> {
        let url = crate::operation::request_url(&handle, "/buckets")?;
        let response = crate::operation::dispatch(&handle, TransportRequest::get(url)).await?;

        // The service answers with a bare JSON array of names, in whatever
        // order it chooses; that order is preserved as delivered.
        let names: Vec<String> = serde_json::from_slice(response.body())
            .map_err(|err| Error::new(ErrorKind::TransportFailed, err))?;

        tracing::trace!(count = names.len(), "listed bucket names");
        Ok(ListBucketsOutput::builder().set_bucket_names(names).build())
    }
}

#[cfg(test)]
mod test {
    use crate::http::mock::StaticTransport;
    use crate::{Client, Config, ErrorKind};

    fn client_with(transport: StaticTransport) -> Client {
        let config = Config::builder().http_client(transport).build();
        Client::new("ak", "sk", config)
    }

    #[tokio::test]
    async fn test_list_parses_names_in_order() {
        let transport = StaticTransport::new(vec![StaticTransport::reply(
            200,
            r#"["alpha","beta","gamma"]"#,
        )]);
        let client = client_with(transport);

        let output = client.list_buckets().send().await.unwrap();
        assert_eq!(output.bucket_names(), ["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_empty_account_lists_no_names() {
        let transport = StaticTransport::new(vec![StaticTransport::reply(200, "[]")]);
        let client = client_with(transport);

        let output = client.list_buckets().send().await.unwrap();
        assert!(output.bucket_names().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_transport_failure() {
        let transport = StaticTransport::new(vec![StaticTransport::reply(200, "not json")]);
        let client = client_with(transport);

        let err = client.list_buckets().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::TransportFailed);
    }

    #[tokio::test]
    async fn test_rejected_credential() {
        let transport = StaticTransport::new(vec![StaticTransport::reply(
            401,
            r#"{"error":"bad token"}"#,
        )]);
        let client = client_with(transport);

        let err = client.list_buckets().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::AuthenticationFailed);
    }
}
