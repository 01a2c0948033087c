/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Access-key/secret-key pair used to authenticate control-plane requests.
///
/// Construction never fails and performs no validation; a credential the
/// service does not recognize surfaces as
/// [`ErrorKind::AuthenticationFailed`](crate::error::ErrorKind::AuthenticationFailed)
/// on first use. The secret key is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_key: String,
    secret_key: String,
}

impl Credential {
    /// Creates a new credential pair.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the access key.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the secret key.
    ///
    /// Transport implementations need this to sign requests; it must never
    /// be logged or embedded in error messages.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Credential;

    #[test]
    fn test_accessors() {
        let credential = Credential::new("ak", "sk");
        assert_eq!(credential.access_key(), "ak");
        assert_eq!(credential.secret_key(), "sk");
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let credential = Credential::new("my-access-key", "my-secret-key");
        let debug = format!("{:?}", credential);
        assert!(debug.contains("my-access-key"));
        assert!(!debug.contains("my-secret-key"));
    }
}
