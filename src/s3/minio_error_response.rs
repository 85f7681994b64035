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

use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::convert::Infallible;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by the server that the provisioner needs to tell apart.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MinioErrorCode {
    #[default]
    NoError,
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The bucket policy does not exist
    NoSuchBucketPolicy,
    /// The specified key does not exist
    NoSuchKey,
    /// Your previous request to create the named bucket succeeded and you already own it
    BucketAlreadyOwnedByYou,
    /// The requested bucket name is not available
    BucketAlreadyExists,
    /// Policy has invalid resource or grammar
    MalformedPolicy,
    AccessDenied,
    MethodNotAllowed,
    ResourceNotFound,
    ResourceConflict,

    OtherError(String), // catch-all for any code not listed above
}

#[allow(dead_code)]
const ALL_MINIO_ERROR_CODE: &[MinioErrorCode] = &[
    MinioErrorCode::NoError,
    MinioErrorCode::NoSuchBucket,
    MinioErrorCode::NoSuchBucketPolicy,
    MinioErrorCode::NoSuchKey,
    MinioErrorCode::BucketAlreadyOwnedByYou,
    MinioErrorCode::BucketAlreadyExists,
    MinioErrorCode::MalformedPolicy,
    MinioErrorCode::AccessDenied,
    MinioErrorCode::MethodNotAllowed,
    MinioErrorCode::ResourceNotFound,
    MinioErrorCode::ResourceConflict,
];

impl FromStr for MinioErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.to_lowercase().as_str() {
            "noerror" => MinioErrorCode::NoError,
            "nosuchbucket" => MinioErrorCode::NoSuchBucket,
            "nosuchbucketpolicy" => MinioErrorCode::NoSuchBucketPolicy,
            "nosuchkey" => MinioErrorCode::NoSuchKey,
            "bucketalreadyownedbyyou" => MinioErrorCode::BucketAlreadyOwnedByYou,
            "bucketalreadyexists" => MinioErrorCode::BucketAlreadyExists,
            "malformedpolicy" => MinioErrorCode::MalformedPolicy,
            "accessdenied" => MinioErrorCode::AccessDenied,
            "methodnotallowed" => MinioErrorCode::MethodNotAllowed,
            "resourcenotfound" => MinioErrorCode::ResourceNotFound,
            "resourceconflict" => MinioErrorCode::ResourceConflict,
            v => MinioErrorCode::OtherError(v.to_owned()),
        })
    }
}

impl std::fmt::Display for MinioErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MinioErrorCode::NoError => write!(f, "NoError"),
            MinioErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            MinioErrorCode::NoSuchBucketPolicy => write!(f, "NoSuchBucketPolicy"),
            MinioErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            MinioErrorCode::BucketAlreadyOwnedByYou => write!(f, "BucketAlreadyOwnedByYou"),
            MinioErrorCode::BucketAlreadyExists => write!(f, "BucketAlreadyExists"),
            MinioErrorCode::MalformedPolicy => write!(f, "MalformedPolicy"),
            MinioErrorCode::AccessDenied => write!(f, "AccessDenied"),
            MinioErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            MinioErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            MinioErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            MinioErrorCode::OtherError(msg) => write!(f, "{msg}"),
        }
    }
}

/// Typed error returned by the server in an XML `<Error>` body, or synthesized from the
/// HTTP status code when the body is empty (HEAD requests).
#[derive(Clone, Debug)]
pub struct MinioErrorResponse {
    code: MinioErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
    object_name: Option<String>,
}

impl MinioErrorResponse {
    pub fn new(
        headers: HeaderMap,
        code: MinioErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
        object_name: Option<String>,
    ) -> Self {
        Self {
            code,
            message,
            headers,
            resource,
            request_id,
            host_id,
            bucket_name,
            object_name,
        }
    }

    pub fn new_from_body(body: Bytes, headers: HeaderMap) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        let code = get_text_default(&root, "Code");
        Ok(Self {
            headers,
            code: code.parse().unwrap_or_default(),
            message: get_text_option(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Takes ownership of the headers, leaving an empty map in place.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }
    pub fn code(&self) -> MinioErrorCode {
        self.code.clone()
    }
    pub fn message(&self) -> &Option<String> {
        &self.message
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn bucket_name(&self) -> &Option<String> {
        &self.bucket_name
    }
    pub fn object_name(&self) -> &Option<String> {
        &self.object_name
    }
}

impl std::fmt::Display for MinioErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S3 operation failed; code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}, object_name: {}",
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name.as_deref().unwrap_or_default(),
            self.object_name.as_deref().unwrap_or_default(),
        )
    }
}

impl std::error::Error for MinioErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minio_error_code_roundtrip() {
        for code in ALL_MINIO_ERROR_CODE {
            let s = code.to_string();
            let parsed: MinioErrorCode = s.parse().unwrap();
            assert_eq!(parsed, *code, "code {code} -> '{s}' -> {parsed}");
        }
    }

    #[test]
    fn test_parse_error_body() {
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <Error><Code>NoSuchBucketPolicy</Code>\
            <Message>The bucket policy does not exist</Message>\
            <BucketName>assets</BucketName><Resource>/assets</Resource>\
            <RequestId>17A1</RequestId><HostId>dd9025</HostId></Error>",
        );
        let resp = MinioErrorResponse::new_from_body(body, HeaderMap::new()).unwrap();
        assert_eq!(resp.code(), MinioErrorCode::NoSuchBucketPolicy);
        assert_eq!(resp.bucket_name().as_deref(), Some("assets"));
        assert_eq!(resp.object_name(), &None);
        assert_eq!(resp.request_id(), "17A1");
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let code: MinioErrorCode = "SlowDown".parse().unwrap();
        assert_eq!(code, MinioErrorCode::OtherError("slowdown".into()));
    }
}
