/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use qiniu_storage_manager::credential::Credential;
use qiniu_storage_manager::http::{
    HttpTransport, TransportError, TransportRequest, TransportResponse,
};

/// In-memory stand-in for the storage service control plane.
///
/// Routes the three management requests against a shared bucket table and
/// answers with the service's status codes, so lifecycle scenarios run
/// without a network. Cloning shares the underlying namespace, letting a
/// test keep a handle for assertions after moving a clone into the client.
#[derive(Debug, Clone)]
pub struct MockStorageService {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    authorized_access_key: String,
    // name -> region id, insertion-ordered like the service's listing
    buckets: Mutex<Vec<(String, String)>>,
    requests: AtomicUsize,
}

impl MockStorageService {
    pub fn new(access_key: &str) -> Self {
        Self::with_buckets(access_key, &[])
    }

    pub fn with_buckets(access_key: &str, buckets: &[(&str, &str)]) -> Self {
        let buckets = buckets
            .iter()
            .map(|(name, region)| ((*name).to_owned(), (*region).to_owned()))
            .collect();
        Self {
            inner: Arc::new(Inner {
                authorized_access_key: access_key.to_owned(),
                buckets: Mutex::new(buckets),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    /// Total number of transport calls observed, successful or not.
    pub fn request_count(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    pub fn contains(&self, bucket: &str) -> bool {
        self.region_of(bucket).is_some()
    }

    /// The region id the named bucket was created in, if it exists.
    pub fn region_of(&self, bucket: &str) -> Option<String> {
        self.inner
            .buckets
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == bucket)
            .map(|(_, region)| region.clone())
    }

    fn respond(
        status: u16,
        body: impl Into<Bytes>,
    ) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse::new(
            StatusCode::from_u16(status).unwrap(),
            body.into(),
        ))
    }
}

#[async_trait]
impl HttpTransport for MockStorageService {
    async fn send(
        &self,
        credential: &Credential,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.inner.requests.fetch_add(1, Ordering::SeqCst);

        if credential.access_key() != self.inner.authorized_access_key {
            return Self::respond(401, r#"{"error":"bad token"}"#);
        }

        let path = request.url().path().to_owned();
        let mut buckets = self.inner.buckets.lock().unwrap();

        if *request.method() == Method::GET && path == "/buckets" {
            let names: Vec<&str> = buckets.iter().map(|(name, _)| name.as_str()).collect();
            return Self::respond(200, serde_json::to_vec(&names).unwrap());
        }

        if *request.method() == Method::POST {
            if let Some(rest) = path.strip_prefix("/mkbucketv3/") {
                let (name, region) = match rest.split_once("/region/") {
                    Some(parts) => parts,
                    None => return Self::respond(400, r#"{"error":"invalid argument"}"#),
                };
                if buckets.iter().any(|(existing, _)| existing == name) {
                    return Self::respond(614, r#"{"error":"the bucket already exists"}"#);
                }
                buckets.push((name.to_owned(), region.to_owned()));
                return Self::respond(200, "");
            }

            if let Some(name) = path.strip_prefix("/drop/") {
                return match buckets.iter().position(|(existing, _)| existing == name) {
                    Some(index) => {
                        buckets.remove(index);
                        Self::respond(200, "")
                    }
                    None => Self::respond(631, r#"{"error":"no such bucket"}"#),
                };
            }
        }

        Self::respond(400, r#"{"error":"invalid argument"}"#)
    }
}
