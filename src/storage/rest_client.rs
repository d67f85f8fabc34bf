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


//! Blocking HTTP transport speaking the storage JSON API

use crate::storage::error::Error;
use crate::storage::multimap_ext::{Multimap, MultimapExt};
use crate::storage::options::ClientOptions;
use crate::storage::raw_client::RawClient;
use crate::storage::request::{
    DeleteObjectRequest, GetBucketMetadataRequest, GetObjectMetadataRequest,
    InsertObjectMediaRequest, ListBucketsRequest, ListObjectAclRequest, ListObjectsRequest,
    ReadObjectRangeRequest,
};
use crate::storage::response::{
    EmptyResponse, ListBucketsResponse, ListObjectAclResponse, ListObjectsResponse,
    ReadObjectRangeResponse,
};
use crate::storage::status::{Status, StatusCode};
use crate::storage::types::{BucketMetadata, GenericRequest, ObjectMetadata, ParameterList};
use bytes::Bytes;
use http::Method;
use http::header::{AUTHORIZATION, CONTENT_RANGE, CONTENT_TYPE, RANGE};
use reqwest::blocking::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A [`RawClient`] sending each request over HTTP with `reqwest`.
///
/// It applies no retry and no logging of its own; wrap it with
/// [`RetryClient`](crate::storage::RetryClient) and
/// [`LoggingClient`](crate::storage::LoggingClient) for that.
#[derive(Clone, Debug)]
pub struct RestClient {
    options: ClientOptions,
    http_client: reqwest::blocking::Client,
}

/// Error payload of the JSON API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorDetails {
    message: String,
}

/// Builds the status of a failed HTTP response, preferring the message of
/// the JSON error payload over the raw body.
fn status_from_response(code: u16, body: &str) -> Status {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(e) if !e.error.message.is_empty() => Status::from_http(code, e.error.message),
        _ => Status::from_http(code, body.trim()),
    }
}

fn status_from_transport_error(e: reqwest::Error) -> Status {
    if e.is_timeout() {
        Status::deadline_exceeded(e.to_string())
    } else if e.is_builder() {
        Status::invalid_argument(e.to_string())
    } else {
        Status::unavailable(e.to_string())
    }
}

fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, Status> {
    let text = response.text().map_err(status_from_transport_error)?;
    serde_json::from_str(&text).map_err(|e| {
        Status::new(
            StatusCode::Unknown,
            format!("cannot parse response payload: {e}"),
        )
    })
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

impl RestClient {
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let mut builder =
            reqwest::blocking::Client::builder().user_agent(options.user_agent());
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            options,
        })
    }

    fn endpoint(&self) -> &str {
        self.options.endpoint().trim_end_matches('/')
    }

    /// URL of a JSON API resource, `path` starting with `/`.
    fn storage_url(&self, path: &str) -> String {
        format!(
            "{}/storage/{}{}",
            self.endpoint(),
            self.options.version(),
            path
        )
    }

    fn upload_url(&self, path: &str) -> String {
        format!(
            "{}/upload/storage/{}{}",
            self.endpoint(),
            self.options.version(),
            path
        )
    }

    fn bucket_path(bucket_name: &str) -> String {
        format!("/b/{}", encode(bucket_name))
    }

    fn object_path(bucket_name: &str, object_name: &str) -> String {
        format!("/b/{}/o/{}", encode(bucket_name), encode(object_name))
    }

    fn execute(
        &self,
        method: Method,
        url: String,
        query: &Multimap,
        headers: &Multimap,
        body: Option<Bytes>,
    ) -> Result<Response, Status> {
        let query_string = query.to_query_string();
        let url = if query_string.is_empty() {
            url
        } else {
            format!("{url}?{query_string}")
        };
        log::debug!("{method} {url}");

        let mut request = self.http_client.request(method, url);
        if let Some(authorization) = self.options.credentials().authorization_header() {
            request = request.header(AUTHORIZATION, authorization);
        }
        for (key, values) in headers.iter_all() {
            for value in values {
                request = request.header(key.as_str(), value.as_str());
            }
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().map_err(status_from_transport_error)?;
        if response.status().is_success() {
            return Ok(response);
        }

        let code = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        Err(status_from_response(code, &body))
    }

    fn get<T: DeserializeOwned>(&self, url: String, query: Multimap) -> Result<T, Status> {
        let response = self.execute(Method::GET, url, &query, &Multimap::new(), None)?;
        parse_json(response)
    }

    fn query_for<R: GenericRequest>(request: &R) -> Multimap {
        let mut query = Multimap::new();
        request.parameters().add_to_query(&mut query);
        query
    }
}

impl RawClient for RestClient {
    fn client_options(&self) -> &ClientOptions {
        &self.options
    }

    fn list_buckets(&self, request: &ListBucketsRequest) -> Result<ListBucketsResponse, Status> {
        let mut query = Self::query_for(request);
        query.add("project", request.project_id());
        if !request.page_token().is_empty() {
            query.add("pageToken", request.page_token());
        }
        self.get(self.storage_url("/b"), query)
    }

    fn get_bucket_metadata(
        &self,
        request: &GetBucketMetadataRequest,
    ) -> Result<BucketMetadata, Status> {
        let url = self.storage_url(&Self::bucket_path(request.bucket_name()));
        self.get(url, Self::query_for(request))
    }

    fn insert_object_media(
        &self,
        request: &InsertObjectMediaRequest,
    ) -> Result<ObjectMetadata, Status> {
        let url = self.upload_url(&format!("{}/o", Self::bucket_path(request.bucket_name())));
        let mut query = Self::query_for(request);
        query.add("uploadType", "media");
        query.add("name", request.object_name());
        let mut headers = Multimap::new();
        headers.add(CONTENT_TYPE.as_str(), "application/octet-stream");

        let response = self.execute(
            Method::POST,
            url,
            &query,
            &headers,
            Some(request.contents().clone()),
        )?;
        parse_json(response)
    }

    fn get_object_metadata(
        &self,
        request: &GetObjectMetadataRequest,
    ) -> Result<ObjectMetadata, Status> {
        let url = self.storage_url(&Self::object_path(
            request.bucket_name(),
            request.object_name(),
        ));
        self.get(url, Self::query_for(request))
    }

    fn read_object_range_media(
        &self,
        request: &ReadObjectRangeRequest,
    ) -> Result<ReadObjectRangeResponse, Status> {
        let url = self.storage_url(&Self::object_path(
            request.bucket_name(),
            request.object_name(),
        ));
        let mut query = Self::query_for(request);
        query.add("alt", "media");
        let mut headers = Multimap::new();
        if let Some(range) = request.range_header() {
            headers.add(RANGE.as_str(), range);
        }

        let response = self.execute(Method::GET, url, &query, &headers, None)?;
        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let contents = response.bytes().map_err(status_from_transport_error)?;
        ReadObjectRangeResponse::from_content_range(content_range.as_deref(), contents)
            .map_err(|e| Status::new(StatusCode::Unknown, e))
    }

    fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListObjectsResponse, Status> {
        let url = self.storage_url(&format!("{}/o", Self::bucket_path(request.bucket_name())));
        let mut query = Self::query_for(request);
        if !request.page_token().is_empty() {
            query.add("pageToken", request.page_token());
        }
        self.get(url, query)
    }

    fn delete_object(&self, request: &DeleteObjectRequest) -> Result<EmptyResponse, Status> {
        let url = self.storage_url(&Self::object_path(
            request.bucket_name(),
            request.object_name(),
        ));
        self.execute(
            Method::DELETE,
            url,
            &Self::query_for(request),
            &Multimap::new(),
            None,
        )?;
        Ok(EmptyResponse)
    }

    fn list_object_acl(
        &self,
        request: &ListObjectAclRequest,
    ) -> Result<ListObjectAclResponse, Status> {
        let url = self.storage_url(&format!(
            "{}/acl",
            Self::object_path(request.bucket_name(), request.object_name())
        ));
        self.get(url, Self::query_for(request))
    }
}
