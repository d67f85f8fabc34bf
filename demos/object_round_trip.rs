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
use cloud_storage::storage::types::{Generation, IfGenerationMatch};
use log::info;
use std::io::Read;

/// Upload a small object, read it back in ranges, inspect it and delete it.
#[derive(Parser)]
struct Cli {
    /// Bucket to write the object to.
    bucket: String,
    /// Name of the object to create; it must not exist yet.
    object: String,
    #[arg(long, default_value = "Hello from cloud-storage-rs!")]
    contents: String,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let args = Cli::parse();
    let client = Client::new()?;

    let metadata = client.insert_object(
        &args.bucket,
        &args.object,
        args.contents.clone(),
        (IfGenerationMatch::new(0),),
    )?;
    info!("created {metadata}");

    let mut contents = String::new();
    client
        .read_object(&args.bucket, &args.object, (Generation::new(metadata.generation),))
        .read_to_string(&mut contents)?;
    assert_eq!(contents, args.contents);
    info!("read back {} bytes", contents.len());

    for entry in client.list_object_acl(&args.bucket, &args.object, ())? {
        info!("{entry}");
    }

    client.delete_object(
        &args.bucket,
        &args.object,
        (Generation::new(metadata.generation),),
    )?;
    info!("deleted {}/{}", args.bucket, args.object);
    Ok(())
}
