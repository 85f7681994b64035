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

//! Responses for the S3 API operations used by the provisioner

mod bucket_exists;
mod create_bucket;
mod delete_bucket_policy;
mod get_presigned_object_url;
mod put_bucket_policy;
mod put_object;

pub use bucket_exists::BucketExistsResponse;
pub use create_bucket::CreateBucketResponse;
pub use delete_bucket_policy::DeleteBucketPolicyResponse;
pub use get_presigned_object_url::GetPresignedObjectUrlResponse;
pub use put_bucket_policy::PutBucketPolicyResponse;
pub use put_object::PutObjectResponse;
