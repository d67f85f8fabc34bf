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

//! Optional parameters shared by the storage operations.
//!
//! All of them travel as query parameters of the JSON API.

use super::request_parameters::WellKnownParameter;
use std::fmt;

macro_rules! well_known_parameter {
    ($(#[$meta:meta])* $name:ident, $wire:literal, $ty:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name($ty);

        impl $name {
            pub fn new(value: impl Into<$ty>) -> Self {
                Self(value.into())
            }

            pub fn value(&self) -> &$ty {
                &self.0
            }
        }

        impl WellKnownParameter for $name {
            const NAME: &'static str = $wire;

            fn wire_value(&self) -> String {
                self.0.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}={}", $wire, self.0)
            }
        }
    };
}

well_known_parameter!(
    /// Selects a specific revision of an object.
    Generation,
    "generation",
    i64
);
well_known_parameter!(
    /// Makes the operation conditional on the object's current generation.
    IfGenerationMatch,
    "ifGenerationMatch",
    i64
);
well_known_parameter!(IfGenerationNotMatch, "ifGenerationNotMatch", i64);
well_known_parameter!(
    /// Makes the operation conditional on the current metageneration.
    IfMetagenerationMatch,
    "ifMetagenerationMatch",
    i64
);
well_known_parameter!(IfMetagenerationNotMatch, "ifMetagenerationNotMatch", i64);
well_known_parameter!(
    /// Maximum number of items returned in a single page.
    MaxResults,
    "maxResults",
    i64
);
well_known_parameter!(Prefix, "prefix", String);
well_known_parameter!(Delimiter, "delimiter", String);
well_known_parameter!(
    /// Project to be billed for the request (requester pays buckets).
    UserProject,
    "userProject",
    String
);
well_known_parameter!(
    /// List every generation of each object, not just the live one.
    Versions,
    "versions",
    bool
);
well_known_parameter!(
    /// Canned ACL applied to a newly created object, e.g. `publicRead`.
    PredefinedAcl,
    "predefinedAcl",
    String
);
well_known_parameter!(ContentEncoding, "contentEncoding", String);
well_known_parameter!(
    /// Controls which metadata fields are returned: `full` or `noAcl`.
    Projection,
    "projection",
    String
);

impl Projection {
    pub fn full() -> Self {
        Self::new("full")
    }

    pub fn no_acl() -> Self {
        Self::new("noAcl")
    }
}
