/*
 * Copyright Qiniu, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a bucket name accepted by the service.
const MAX_BUCKET_NAME_LEN: usize = 63;

/// The geographic zone a bucket is assigned to when it is created.
///
/// A bucket's zone is fixed for its lifetime; it is supplied at creation
/// time and never at list or drop time.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// East China (`z0`)
    Z0,

    /// North China (`z1`)
    Z1,

    /// South China (`z2`)
    Z2,

    /// North America (`na0`)
    Na0,

    /// Southeast Asia (`as0`)
    As0,
}

impl Zone {
    /// Returns the region identifier used on the wire for this zone.
    pub fn region_id(&self) -> &'static str {
        match self {
            Zone::Z0 => "z0",
            Zone::Z1 => "z1",
            Zone::Z2 => "z2",
            Zone::Na0 => "na0",
            Zone::As0 => "as0",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.region_id())
    }
}

impl FromStr for Zone {
    type Err = Error;

    /// Parses a region identifier such as `"z1"`.
    ///
    /// A code the client does not recognize is a caller-side validation
    /// error, not a transport error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "z0" => Ok(Zone::Z0),
            "z1" => Ok(Zone::Z1),
            "z2" => Ok(Zone::Z2),
            "na0" => Ok(Zone::Na0),
            "as0" => Ok(Zone::As0),
            other => Err(error::invalid_input(format!(
                "unknown zone code: {other}"
            ))),
        }
    }
}

/// Checks a bucket name against the service naming rules before any request
/// is sent.
pub(crate) fn validate_bucket_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(error::invalid_input("bucket name must not be empty"));
    }
    if name.len() > MAX_BUCKET_NAME_LEN {
        return Err(error::invalid_input(format!(
            "bucket name exceeds {MAX_BUCKET_NAME_LEN} characters"
        )));
    }
    if !name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
    {
        return Err(error::invalid_input(
            "bucket name must start with a letter or digit",
        ));
    }
    if let Some(invalid) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(error::invalid_input(format!(
            "bucket name contains invalid character {invalid:?}"
        )));
    }
    Ok(())
}
