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


use bytes::Bytes;
use cloud_storage::storage::Status;
use cloud_storage::storage::error::Error;
use cloud_storage::storage::options::ClientOptions;
use cloud_storage::storage::request::ReadObjectRangeRequest;
use cloud_storage::storage::types::{Generation, GenericRequest};
use cloud_storage_common::mock_client::MockClient;
use cloud_storage_common::test_context::TestContext;
use cloud_storage_common::utils::{rand_contents, range_of};
use std::io::Read;

/// A mock whose range reads serve `contents`, with a small download chunk.
fn mock_serving(contents: &Bytes, chunk_size: u64, requests: usize) -> MockClient {
    let mock = MockClient {
        options: ClientOptions::builder().download_chunk_size(chunk_size).build(),
        ..Default::default()
    };
    let mut begin = 0;
    for _ in 0..requests {
        mock.read_object_range_media
            .push_ok(range_of(contents, begin, begin + chunk_size));
        begin += chunk_size;
    }
    mock
}

#[test]
fn read_object_reassembles_chunks() {
    let contents = rand_contents(10_000);
    let ctx = TestContext::with_mock(mock_serving(&contents, 4096, 3), 0);

    let mut actual = Vec::new();
    ctx.client
        .read_object("b", "o", (Generation::new(5),))
        .read_to_end(&mut actual)
        .unwrap();
    assert_eq!(actual, contents);

    let requests = ctx.mock.read_object_range_media.requests();
    let ranges: Vec<_> = requests.iter().map(|r| (r.begin(), r.end())).collect();
    assert_eq!(ranges, vec![(0, 4096), (4096, 8192), (8192, 12288)]);
    for request in &requests {
        assert_eq!(request.get_parameter::<Generation>(), Some(&Generation::new(5)));
    }
}

#[test]
fn read_object_small_reads() {
    let contents = Bytes::from_static(b"hello world");
    let ctx = TestContext::with_mock(mock_serving(&contents, 4, 3), 0);

    let mut stream = ctx.client.read_object("b", "o", ());
    let mut buf = [0u8; 3];
    let mut actual = Vec::new();
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        actual.extend_from_slice(&buf[..n]);
    }
    assert_eq!(actual, contents);
    assert_eq!(stream.position(), 11);
    assert_eq!(ctx.mock.read_object_range_media.calls(), 3);
}

#[test]
fn read_object_empty() {
    let contents = Bytes::new();
    let ctx = TestContext::with_mock(mock_serving(&contents, 16, 1), 0);
    let actual = ctx.client.read_object("b", "o", ()).read_all().unwrap();
    assert!(actual.is_empty());
    assert_eq!(ctx.mock.read_object_range_media.calls(), 1);
}

#[test]
fn read_object_retries_each_range() {
    let contents = rand_contents(64);
    let mock = MockClient {
        options: ClientOptions::builder().download_chunk_size(32).build(),
        ..Default::default()
    };
    mock.read_object_range_media
        .push_err(Status::unavailable("try-again"))
        .push_ok(range_of(&contents, 0, 32))
        .push_err(Status::unavailable("try-again"))
        .push_ok(range_of(&contents, 32, 64));
    let ctx = TestContext::with_mock(mock, 1);

    let actual = ctx.client.read_object("b", "o", ()).read_all().unwrap();
    assert_eq!(actual, contents);
    assert_eq!(ctx.mock.read_object_range_media.calls(), 4);
}

#[test]
fn read_object_error_keeps_its_class() {
    let ctx = TestContext::new(0);
    ctx.mock
        .read_object_range_media
        .push_err(Status::not_found("no such object"));

    let err = ctx.client.read_object("b", "o", ()).read_all().unwrap_err();
    assert!(matches!(err, Error::PermanentFailure { .. }), "{err:?}");
    assert_eq!(err.operation(), Some("ReadObjectRangeMedia"));
}

#[test]
fn read_object_range_single_request() {
    let contents = rand_contents(100);
    let ctx = TestContext::new(0);
    ctx.mock
        .read_object_range_media
        .push_ok(range_of(&contents, 10, 20));

    let response = ctx.client.read_object_range("b", "o", 10, 20, ()).unwrap();
    assert_eq!(response.contents, contents.slice(10..20));
    assert_eq!(response.first_byte, 10);
    assert_eq!(response.last_byte, 19);
    assert_eq!(response.object_size, 100);

    let requests = ctx.mock.read_object_range_media.requests();
    assert_eq!(requests, vec![ReadObjectRangeRequest::new("b", "o", 10, 20)]);
}
