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

//! Error types returned by the S3 client.

use crate::s3::minio_error_response::{MinioErrorCode, MinioErrorResponse};
use thiserror::Error;

/// Errors detected on the client side, before or while talking to the server.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("URL build error: {0}")]
    UrlBuildError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("header value is not valid ASCII: {0}")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),
}

/// Errors reported by the S3 server.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<MinioErrorResponse>),

    #[error(
        "invalid server response: {message} (status code {http_status_code}, content-type '{content_type}')"
    )]
    InvalidServerResponse {
        message: String,
        http_status_code: u16,
        content_type: String,
    },
}

/// Top level error of every S3 API call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("S3 server error: {0}")]
    S3Server(#[from] S3ServerError),
}

impl Error {
    /// Returns the server error code when this error came from an S3 error response.
    pub fn s3_error_code(&self) -> Option<MinioErrorCode> {
        match self {
            Error::S3Server(S3ServerError::S3Error(e)) => Some(e.code()),
            _ => None,
        }
    }
}
