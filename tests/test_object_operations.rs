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
use cloud_storage::storage::response::{EmptyResponse, ListObjectAclResponse};
use cloud_storage::storage::types::{
    GenericRequest, IfGenerationMatch, ObjectAccessControl, ParameterList, PredefinedAcl,
    Projection, UserProject,
};
use cloud_storage_common::test_context::TestContext;
use cloud_storage_common::utils::{object, rand_contents, rand_object_name};

#[test]
fn insert_object_sends_contents_and_parameters() {
    let ctx = TestContext::new(0);
    let object_name = rand_object_name();
    let contents = rand_contents(128);
    ctx.mock
        .insert_object_media
        .push_ok(object("b", &object_name, 128));

    let metadata = ctx
        .client
        .insert_object(
            "b",
            &object_name,
            contents.clone(),
            (IfGenerationMatch::new(0), PredefinedAcl::new("publicRead")),
        )
        .unwrap();
    assert_eq!(metadata.name, object_name);
    assert_eq!(metadata.size, 128);

    let requests = ctx.mock.insert_object_media.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].object_name(), object_name);
    assert_eq!(requests[0].contents(), &contents);
    assert_eq!(
        requests[0].parameters().dump(),
        "ifGenerationMatch=0, predefinedAcl=publicRead"
    );
}

#[test]
fn insert_object_precondition_failure_is_permanent() {
    let ctx = TestContext::new(3);
    ctx.mock
        .insert_object_media
        .push_err(Status::from_http(412, "precondition failed"));

    let err = ctx
        .client
        .insert_object("b", "o", Bytes::from_static(b"x"), (IfGenerationMatch::new(0),))
        .unwrap_err();
    assert!(matches!(err, Error::PermanentFailure { .. }));
    assert_eq!(err.operation(), Some("InsertObjectMedia"));
    assert_eq!(ctx.mock.insert_object_media.calls(), 1);
}

#[test]
fn get_object_metadata() {
    let ctx = TestContext::new(1);
    ctx.mock
        .get_object_metadata
        .push_err(Status::from_http(503, "backend error"))
        .push_ok(object("b", "o", 42));

    let metadata = ctx
        .client
        .get_object_metadata("b", "o", (Projection::no_acl(),))
        .unwrap();
    assert_eq!(metadata.size, 42);
    assert_eq!(ctx.mock.get_object_metadata.calls(), 2);
}

#[test]
fn delete_object() {
    let ctx = TestContext::new(0);
    ctx.mock.delete_object.push_ok(EmptyResponse);

    ctx.client
        .delete_object("b", "o", (UserProject::new("billing"),))
        .unwrap();
    let requests = ctx.mock.delete_object.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].bucket_name(), "b");
    assert_eq!(requests[0].object_name(), "o");
    assert_eq!(
        requests[0].get_parameter::<UserProject>(),
        Some(&UserProject::new("billing"))
    );
}

#[test]
fn delete_missing_object() {
    let ctx = TestContext::new(2);
    ctx.mock.delete_object.push_err(Status::not_found("no such object"));

    let err = ctx.client.delete_object("b", "o", ()).unwrap_err();
    assert!(err.to_string().contains("Permanent error in DeleteObject"));
    assert_eq!(ctx.mock.delete_object.calls(), 1);
}

#[test]
fn list_object_acl() {
    let ctx = TestContext::new(0);
    let entry = ObjectAccessControl {
        bucket: "b".to_string(),
        object: "o".to_string(),
        entity: "allUsers".to_string(),
        role: "READER".to_string(),
        ..Default::default()
    };
    ctx.mock.list_object_acl.push_ok(ListObjectAclResponse {
        items: vec![entry.clone()],
    });

    let acl = ctx.client.list_object_acl("b", "o", ()).unwrap();
    assert_eq!(acl, vec![entry]);
}
