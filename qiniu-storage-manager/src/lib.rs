/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! Qiniu Storage Manager
//!
//! A control-plane client for Qiniu object storage. The client authenticates
//! with an access-key/secret-key pair and exposes the bucket management
//! operations: listing the bucket names owned by the credential, creating a
//! bucket in a geographic zone, and dropping a bucket.
//!
//! Object data transfer (upload/download) is out of scope for this crate.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Control-plane endpoint used when none is configured.
pub(crate) const DEFAULT_ENDPOINT: &str = "https://rs.qbox.me";

/// Error types emitted by `qiniu-storage-manager`
pub mod error;

/// Common types used by `qiniu-storage-manager`
pub mod types;

/// Access credentials
pub mod credential;

/// HTTP transport boundary
pub mod http;

/// Storage manager client
pub mod client;

/// Client configuration
pub mod config;

/// Storage manager operations
pub mod operation;

pub use client::Client;
pub use config::Config;
pub use credential::Credential;
pub use error::{Error, ErrorKind};
pub use types::Zone;
