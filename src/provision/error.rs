// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types of the provisioning run.
//!
//! Only [`ConfigError`] is fatal. Everything else is reported per bucket and the
//! run moves on to the next one.

use crate::s3::error::Error;
use thiserror::Error;

/// Failure while making sure a bucket exists.
#[derive(Error, Debug)]
pub enum EnsureError {
    #[error("error checking bucket {bucket}: {source}")]
    ExistenceCheck {
        bucket: String,
        #[source]
        source: Error,
    },

    #[error("error creating bucket {bucket}: {source}")]
    Create {
        bucket: String,
        #[source]
        source: Error,
    },
}

/// Failure while deriving or applying an access policy.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("error serializing policy: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("error setting policy for {bucket}: {source}")]
    Apply {
        bucket: String,
        #[source]
        source: Error,
    },

    #[error("error clearing policy for {bucket}: {source}")]
    Clear {
        bucket: String,
        #[source]
        source: Error,
    },
}

/// Failure of a single bucket in a provisioning run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error(transparent)]
    Ensure(#[from] EnsureError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Failure while publishing a generated client snippet.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to upload client code {object} to {bucket}: {source}")]
    Upload {
        bucket: String,
        object: String,
        #[source]
        source: Error,
    },

    #[error("could not presign client URL for {object}: {source}")]
    Sign {
        object: String,
        #[source]
        source: Error,
    },
}

/// Fatal configuration problems detected before any request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no buckets to configure")]
    MissingBuckets,

    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: crate::s3::error::ValidationErr,
    },

    #[error("invalid public URL '{0}'")]
    InvalidPublicUrl(String),

    #[error("failed to construct storage client: {0}")]
    Client(#[source] Error),
}
