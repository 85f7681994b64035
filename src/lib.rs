// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! # minio-init
//!
//! Provisions buckets and their access policies on MinIO and other S3 compatible
//! object storage, and optionally publishes a small client snippet for the
//! application that will use them.
//!
//! The crate has two layers:
//! - [`s3`]: a lean async client covering the handful of S3 operations needed here.
//!   Each operation on [`s3::MinioClient`] returns a request builder; builders implement
//!   [`s3::types::ToS3Request`] and [`s3::types::S3Api`], and responses implement
//!   [`s3::types::FromS3Response`].
//! - [`provision`]: parsing of `name[:mode]` entries, policy derivation, the
//!   provisioning run and client generation, written against the
//!   [`provision::StorageBackend`] trait.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use minio_init::provision::{Provisioner, parse_bucket_specs};
//! use minio_init::s3::MinioClientBuilder;
//! use minio_init::s3::creds::StaticProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = MinioClientBuilder::new("http://127.0.0.1:9000".parse().unwrap())
//!         .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
//!         .build()
//!         .unwrap();
//!
//!     let specs = parse_bucket_specs("assets:public,uploads,internal:ip=10.0.0.0/8");
//!     let report = Provisioner::new(client).run(&specs).await;
//!     println!("{} of {} buckets ready", report.succeeded(), report.outcomes().len());
//! }
//! ```

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod provision;
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
