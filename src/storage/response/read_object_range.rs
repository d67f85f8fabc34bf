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
use std::fmt;

/// A contiguous slice of an object's data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadObjectRangeResponse {
    pub contents: Bytes,
    /// Offset of the first byte in `contents`.
    pub first_byte: u64,
    /// Offset of the last byte in `contents`, inclusive.
    pub last_byte: u64,
    /// Total size of the object.
    pub object_size: u64,
}

impl ReadObjectRangeResponse {
    /// Builds a response from the payload and the value of the
    /// `Content-Range` header, e.g. `bytes 0-1023/4096`.
    ///
    /// A missing header means the whole object was returned.
    pub fn from_content_range(
        content_range: Option<&str>,
        contents: Bytes,
    ) -> Result<Self, String> {
        let Some(content_range) = content_range else {
            let size = contents.len() as u64;
            return Ok(Self {
                contents,
                first_byte: 0,
                last_byte: size.saturating_sub(1),
                object_size: size,
            });
        };

        let (first_byte, last_byte, object_size) = parse_content_range(content_range)
            .ok_or_else(|| format!("invalid Content-Range header: {content_range}"))?;
        Ok(Self {
            contents,
            first_byte,
            last_byte,
            object_size,
        })
    }

    /// Whether the range ends at the last byte of the object.
    pub fn is_last_range(&self) -> bool {
        self.last_byte + 1 >= self.object_size
    }
}

/// Parses `bytes <first>-<last>/<size>`.
fn parse_content_range(value: &str) -> Option<(u64, u64, u64)> {
    let rest = value.trim().strip_prefix("bytes ")?;
    let (range, size) = rest.split_once('/')?;
    let size = size.trim().parse().ok()?;
    if range.trim() == "*" {
        // unsatisfied range, e.g. an empty object
        return Some((0, 0, size));
    }
    let (first, last) = range.split_once('-')?;
    let first: u64 = first.trim().parse().ok()?;
    let last: u64 = last.trim().parse().ok()?;
    if last < first {
        return None;
    }
    Some((first, last, size))
}

impl fmt::Display for ReadObjectRangeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReadObjectRangeResponse={{range={}-{}/{}, contents_size={}}}",
            self.first_byte,
            self.last_byte,
            self.object_size,
            self.contents.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("bytes 0-1023/4096"), Some((0, 1023, 4096)));
        assert_eq!(parse_content_range("bytes */0"), Some((0, 0, 0)));
        assert_eq!(parse_content_range("bytes 10-5/20"), None);
        assert_eq!(parse_content_range("items 0-1/2"), None);
        assert_eq!(parse_content_range("bytes 0-x/2"), None);
    }

    #[test]
    fn test_from_content_range() {
        let response = ReadObjectRangeResponse::from_content_range(
            Some("bytes 4-7/8"),
            Bytes::from_static(b"4567"),
        )
        .unwrap();
        assert_eq!(response.first_byte, 4);
        assert_eq!(response.last_byte, 7);
        assert!(response.is_last_range());
        assert!(ReadObjectRangeResponse::from_content_range(Some("junk"), Bytes::new()).is_err());
    }

    #[test]
    fn test_missing_header_means_whole_object() {
        let response =
            ReadObjectRangeResponse::from_content_range(None, Bytes::from_static(b"abc")).unwrap();
        assert_eq!(response.object_size, 3);
        assert_eq!(response.last_byte, 2);
        assert!(response.is_last_range());
    }
}
