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

//! Value types shared by requests, responses and the client

mod metadata;
pub mod request_parameters;
mod well_known_parameters;

pub use metadata::{BucketMetadata, ObjectAccessControl, ObjectMetadata};
pub use request_parameters::{
    Accepts, GenericRequest, ParameterList, ParameterSet, WellKnownParameter, dump_parameters,
};
pub use well_known_parameters::*;
