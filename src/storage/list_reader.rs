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


//! Lazy iteration over paginated list operations

use crate::storage::error::Error;
use crate::storage::request::{ListBucketsRequest, ListObjectsRequest};
use crate::storage::response::{ListBucketsResponse, ListObjectsResponse};
use crate::storage::retry_client::RetryClient;
use crate::storage::types::{BucketMetadata, ObjectMetadata};
use std::fmt;

/// A request for one page of a paginated listing.
pub trait PagedRequest: Clone {
    type Page: Page;

    fn set_page_token(&mut self, page_token: String);

    fn fetch(client: &RetryClient, request: &Self) -> Result<Self::Page, Error>;
}

/// One page of a paginated listing.
pub trait Page {
    type Item;

    /// Splits the page into its items and the token of the next page,
    /// empty on the last page.
    fn into_parts(self) -> (Vec<Self::Item>, String);
}

/// Iterates the items of a paginated listing, fetching pages on demand.
///
/// No call is made until the first item is requested, and the next page is
/// only fetched once the current one has been consumed. If fetching a page
/// fails the error is yielded once and the iteration ends.
pub struct ListReader<R: PagedRequest> {
    client: RetryClient,
    request: R,
    items: std::vec::IntoIter<<R::Page as Page>::Item>,
    next_page_token: Option<String>,
}

impl<R: PagedRequest> ListReader<R> {
    pub fn new(client: RetryClient, request: R) -> Self {
        Self {
            client,
            request,
            items: Vec::new().into_iter(),
            next_page_token: Some(String::new()),
        }
    }
}

impl<R: PagedRequest + fmt::Debug> fmt::Debug for ListReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListReader")
            .field("request", &self.request)
            .field("buffered_items", &self.items.len())
            .field("next_page_token", &self.next_page_token)
            .finish()
    }
}

impl<R: PagedRequest> Iterator for ListReader<R> {
    type Item = Result<<R::Page as Page>::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(Ok(item));
            }

            let page_token = self.next_page_token.take()?;
            self.request.set_page_token(page_token);
            let (items, next_page_token) = match R::fetch(&self.client, &self.request) {
                Ok(page) => page.into_parts(),
                Err(e) => return Some(Err(e)),
            };
            self.items = items.into_iter();
            if !next_page_token.is_empty() {
                self.next_page_token = Some(next_page_token);
            }
        }
    }
}

pub type ListObjectsReader = ListReader<ListObjectsRequest>;

pub type ListBucketsReader = ListReader<ListBucketsRequest>;

impl PagedRequest for ListObjectsRequest {
    type Page = ListObjectsResponse;

    fn set_page_token(&mut self, page_token: String) {
        ListObjectsRequest::set_page_token(self, page_token);
    }

    fn fetch(client: &RetryClient, request: &Self) -> Result<Self::Page, Error> {
        client.list_objects(request)
    }
}

impl Page for ListObjectsResponse {
    type Item = ObjectMetadata;

    fn into_parts(self) -> (Vec<ObjectMetadata>, String) {
        (self.items, self.next_page_token)
    }
}

impl PagedRequest for ListBucketsRequest {
    type Page = ListBucketsResponse;

    fn set_page_token(&mut self, page_token: String) {
        ListBucketsRequest::set_page_token(self, page_token);
    }

    fn fetch(client: &RetryClient, request: &Self) -> Result<Self::Page, Error> {
        client.list_buckets(request)
    }
}

impl Page for ListBucketsResponse {
    type Item = BucketMetadata;

    fn into_parts(self) -> (Vec<BucketMetadata>, String) {
        (self.items, self.next_page_token)
    }
}
