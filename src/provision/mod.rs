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

//! Bucket provisioning on top of the [`s3`](crate::s3) client.
//!
//! A run takes a list of `name[:mode]` entries, makes sure every bucket exists and
//! leaves it with the access policy its mode asks for:
//!
//! | mode | policy |
//! |---|---|
//! | `private` (default) | none, any previous policy is removed |
//! | `public` | anonymous `s3:GetObject` on all objects |
//! | `ip=a;b` | every action (`s3:*`) on the bucket and its objects denied to any other address |
//!
//! Buckets are handled one at a time and a failure on one does not stop the others.
//! Afterwards a client snippet can be rendered with [`render_client`] and uploaded to
//! the first bucket with [`publish_client`].

pub mod apply;
pub mod backend;
pub mod bucket_spec;
pub mod codegen;
pub mod config;
pub mod ensure;
pub mod error;
pub mod policy;
pub mod provisioner;
pub mod publish;

pub use apply::{PolicyApplied, apply_policy};
pub use backend::StorageBackend;
pub use bucket_spec::{AccessMode, BucketSpec, parse_bucket_specs, primary_bucket};
pub use codegen::{ClientLanguage, ClientParams, GeneratedClient, PublicEndpoint, render_client};
pub use config::{Cli, Config};
pub use ensure::{EnsureOutcome, ensure_bucket};
pub use error::{ConfigError, EnsureError, PolicyError, ProvisionError, PublishError};
pub use policy::{PolicyDocument, derive_policy};
pub use provisioner::{BucketOutcome, BucketStatus, ProvisionReport, Provisioner};
pub use publish::{LinkStyle, publish_client, write_banner};
