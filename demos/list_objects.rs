// Cloud Storage Rust Client Library
// Copyright 2025 The cloud-storage Authors.
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
use cloud_storage::storage::Client;
use cloud_storage::storage::types::{Delimiter, MaxResults, Prefix};
use log::info;

/// List the objects of a bucket, one page of `--page-size` objects at a time.
///
/// The endpoint and credentials come from the environment, e.g.
/// `GOOGLE_OAUTH_ACCESS_TOKEN`; set `CLOUD_STORAGE_ENABLE_TRACING=raw-client`
/// and `RUST_LOG=info` to see every request.
#[derive(Parser)]
struct Cli {
    /// Bucket to list.
    bucket: String,
    /// Only list objects whose name starts with this prefix.
    #[arg(long, default_value = "")]
    prefix: String,
    /// Group names sharing a prefix up to this delimiter.
    #[arg(long, default_value = "")]
    delimiter: String,
    #[arg(long, default_value_t = 100)]
    page_size: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let args = Cli::parse();
    let client = Client::new()?;

    let objects = client.list_objects(
        &args.bucket,
        (
            Prefix::new(args.prefix),
            Delimiter::new(args.delimiter),
            MaxResults::new(args.page_size),
        ),
    );
    let mut count = 0;
    for object in objects {
        let object = object?;
        println!("{:>12}  {}", object.size, object.name);
        count += 1;
    }
    info!("listed {count} objects in bucket '{}'", args.bucket);
    Ok(())
}
