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


use crate::storage::error::Error;
use crate::storage::request::ReadObjectRangeRequest;
use crate::storage::retry_client::RetryClient;
use bytes::{Buf, Bytes};
use std::io;

/// Reads an object sequentially, fetching it in ranges of a fixed size as
/// the caller consumes it.
///
/// Errors from the storage service surface as [`io::Error`]s wrapping an
/// [`Error`]; [`read_all`](Self::read_all) unwraps them again.
#[derive(Debug)]
pub struct ObjectReadStream {
    client: RetryClient,
    request: ReadObjectRangeRequest,
    chunk_size: u64,
    offset: u64,
    buffer: Bytes,
    done: bool,
}

impl ObjectReadStream {
    pub fn new(client: RetryClient, request: ReadObjectRangeRequest, chunk_size: u64) -> Self {
        let offset = request.begin();
        Self {
            client,
            request,
            chunk_size: chunk_size.max(1),
            offset,
            buffer: Bytes::new(),
            done: false,
        }
    }

    /// Offset in the object of the next byte to be returned.
    pub fn position(&self) -> u64 {
        self.offset - self.buffer.len() as u64
    }

    /// Reads the rest of the object into memory.
    pub fn read_all(mut self) -> Result<Vec<u8>, Error> {
        let mut contents = Vec::new();
        io::Read::read_to_end(&mut self, &mut contents).map_err(into_storage_error)?;
        Ok(contents)
    }

    fn fill_buffer(&mut self) -> io::Result<()> {
        self.request
            .set_range(self.offset, self.offset.saturating_add(self.chunk_size));
        let response = self
            .client
            .read_object_range_media(&self.request)
            .map_err(io::Error::other)?;
        log::trace!("read {} bytes at offset {}", response.contents.len(), self.offset);

        self.offset += response.contents.len() as u64;
        if response.contents.is_empty() || response.is_last_range() {
            self.done = true;
        }
        self.buffer = response.contents;
        Ok(())
    }
}

impl io::Read for ObjectReadStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.buffer.is_empty() {
            if self.done {
                return Ok(0);
            }
            self.fill_buffer()?;
        }
        let n = buf.len().min(self.buffer.len());
        buf[..n].copy_from_slice(&self.buffer[..n]);
        self.buffer.advance(n);
        Ok(n)
    }
}

fn into_storage_error(e: io::Error) -> Error {
    let kind = e.kind();
    match e.into_inner() {
        Some(inner) => match inner.downcast::<Error>() {
            Ok(e) => *e,
            Err(inner) => Error::Io(io::Error::new(kind, inner)),
        },
        None => Error::Io(kind.into()),
    }
}
