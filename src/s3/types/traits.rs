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

//! Core traits for S3 request and response handling.

use super::s3_request::S3Request;
use crate::s3::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Converts a request builder into a concrete S3 HTTP request.
///
/// Implemented by every request builder; [`S3Api::send`] calls it before
/// executing the request.
pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    ///
    /// Fails with a [`ValidationErr`] when the parameters cannot form a valid
    /// request, e.g. an invalid bucket name.
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

/// Converts an HTTP response (or the error produced while obtaining it) into a
/// strongly typed S3 response.
#[async_trait]
pub trait FromS3Response: Sized {
    /// Parses `response`, which resulted from executing `s3req`.
    ///
    /// Implementations may turn specific server errors into successful
    /// responses, e.g. a missing bucket becomes `exists == false`.
    async fn from_s3response(
        s3req: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface for all S3 API request builders.
///
/// Works together with [`ToS3Request`] to build the HTTP request and with
/// [`FromS3Response`] to parse the result.
#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the S3 API request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}
