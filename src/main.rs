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

use clap::Parser;
use env_logger::Env;
use minio_init::provision::{
    Cli, Config, ConfigError, Provisioner, publish_client, render_client, write_banner,
};
use minio_init::s3::MinioClient;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ConfigError> {
    let config: Config = cli.into_config()?;
    let client: MinioClient = config.storage_client()?;

    let provisioner = Provisioner::new(client);
    let report = provisioner.run(&config.specs).await;

    if config.gen_client {
        if let Some(bucket) = report.primary_bucket() {
            generate_client(&config, provisioner.backend(), bucket).await;
        }
    }
    Ok(())
}

async fn generate_client(config: &Config, uploader: &MinioClient, bucket: &str) {
    println!(
        "\n🔮 Generating {} client code...",
        config.client_lang.to_string().to_uppercase()
    );

    let endpoint = match config.public_endpoint() {
        Ok(ep) => ep,
        Err(e) => {
            log::error!("❌ Skipping client generation: {e}");
            return;
        }
    };

    let generated = render_client(config.client_lang, &config.client_params(endpoint.clone()));
    if config.print_client {
        println!("{}", generated.content);
    }

    let signer: Option<MinioClient> = match config.signing_client(&endpoint) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("⚠️ Could not create signing client: {e}");
            None
        }
    };
    match publish_client(
        uploader,
        signer.as_ref(),
        bucket,
        &generated,
        config.link_style,
        endpoint.url(),
    )
    .await
    {
        Ok(link) => {
            if let Err(e) = write_banner(&mut std::io::stdout().lock(), &link, config.link_style) {
                log::warn!("could not write download banner: {e}");
            }
        }
        Err(e) => log::error!("❌ {e}"),
    }
}
