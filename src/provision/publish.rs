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

//! Upload of a rendered client snippet and creation of its download link.

use crate::provision::backend::StorageBackend;
use crate::provision::codegen::GeneratedClient;
use crate::provision::error::PublishError;
use bytes::Bytes;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Lifetime of a presigned download link.
pub const CLIENT_LINK_EXPIRY_SECONDS: u32 = 24 * 60 * 60;

/// Shown in place of the link when presigning fails.
pub const LINK_UNAVAILABLE: &str = "Error generating link";

const BANNER_RULE: &str = "==================================================";

/// How the download link of the uploaded snippet is formed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStyle {
    /// A GET URL signed for [`CLIENT_LINK_EXPIRY_SECONDS`].
    #[default]
    Presigned,
    /// A plain object URL. Only useful when the bucket allows anonymous reads.
    Public,
}

impl FromStr for LinkStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "presigned" => Ok(LinkStyle::Presigned),
            "public" => Ok(LinkStyle::Public),
            other => Err(format!(
                "invalid link style '{other}', expected 'presigned' or 'public'"
            )),
        }
    }
}

impl fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkStyle::Presigned => "presigned",
            LinkStyle::Public => "public",
        })
    }
}

/// Uploads `client` into `bucket` through `uploader` and returns its download link.
///
/// `signer` should address the service by its public URL so the link is usable from
/// outside. A missing signer or a signing failure is not fatal: it is logged and the
/// returned link is [`LINK_UNAVAILABLE`]. An upload failure is returned as an error.
pub async fn publish_client<U, S>(
    uploader: &U,
    signer: Option<&S>,
    bucket: &str,
    client: &GeneratedClient,
    link: LinkStyle,
    public_url: &str,
) -> Result<String, PublishError>
where
    U: StorageBackend + ?Sized,
    S: StorageBackend + ?Sized,
{
    uploader
        .put_object(
            bucket,
            client.file_name,
            Bytes::from(client.content.clone()),
            client.content_type,
        )
        .await
        .map_err(|source| PublishError::Upload {
            bucket: bucket.to_string(),
            object: client.file_name.to_string(),
            source,
        })?;
    log::debug!("Uploaded {} to bucket: {bucket}", client.file_name);

    match link {
        LinkStyle::Public => Ok(public_object_url(public_url, bucket, client.file_name)),
        LinkStyle::Presigned => {
            let Some(signer) = signer else {
                log::warn!("⚠️ Could not presign client URL: no signing client");
                return Ok(LINK_UNAVAILABLE.to_string());
            };
            match signer
                .presigned_get_object_url(bucket, client.file_name, CLIENT_LINK_EXPIRY_SECONDS)
                .await
            {
                Ok(url) => Ok(url),
                Err(source) => {
                    let e = PublishError::Sign {
                        object: client.file_name.to_string(),
                        source,
                    };
                    log::warn!("⚠️ {e}");
                    Ok(LINK_UNAVAILABLE.to_string())
                }
            }
        }
    }
}

/// Path-style URL of `bucket/object` under `public_url`.
pub fn public_object_url(public_url: &str, bucket: &str, object: &str) -> String {
    format!("{}/{bucket}/{object}", public_url.trim_end_matches('/'))
}

/// Writes the success banner announcing `link`. Only presigned links carry an
/// expiry note.
pub fn write_banner<W: Write>(out: &mut W, link: &str, style: LinkStyle) -> io::Result<()> {
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "✅ CLIENT CODE GENERATED & UPLOADED")?;
    match style {
        LinkStyle::Presigned => writeln!(out, "👉 DOWNLOAD URL (Valid for 24h):")?,
        LinkStyle::Public => writeln!(out, "👉 DOWNLOAD URL:")?,
    }
    writeln!(out, "{link}")?;
    writeln!(out, "{BANNER_RULE}")
}
