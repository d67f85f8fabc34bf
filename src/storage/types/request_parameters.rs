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

//! Composition of optional request parameters.
//!
//! Each request type declares, once, the closed list of optional parameters
//! it accepts (see [`parameter_list!`]). The declaration produces a
//! parameter list struct that implements [`Accepts<P>`] for exactly the
//! declared kinds, so handing a request a parameter it does not support is
//! a compile error:
//!
//! ```compile_fail
//! use cloud_storage::storage::request::ListObjectAclRequest;
//! use cloud_storage::storage::types::{GenericRequest, Prefix};
//!
//! // `ListObjectAcl` does not accept `Prefix`.
//! let request = ListObjectAclRequest::new("bucket", "object").with(Prefix::new("p"));
//! ```
//!
//! Any number of parameters, in any order, can be applied at once by passing
//! a tuple to [`GenericRequest::set_multiple_parameters`]:
//!
//! ```
//! use cloud_storage::storage::request::GetObjectMetadataRequest;
//! use cloud_storage::storage::types::{Generation, GenericRequest, ParameterList, UserProject};
//!
//! let mut request = GetObjectMetadataRequest::new("bucket", "object");
//! request.set_multiple_parameters((UserProject::new("my-project"), Generation::new(7)));
//! assert_eq!(request.parameters().dump(), "generation=7, userProject=my-project");
//! ```

use crate::storage::multimap_ext::{Multimap, MultimapExt};
use std::fmt;

/// An optional parameter with a stable wire name.
pub trait WellKnownParameter: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Name used on the wire and in debug dumps.
    const NAME: &'static str;

    /// Textual value used on the wire and in debug dumps.
    fn wire_value(&self) -> String;
}

/// Implemented by a parameter list for every parameter kind it declares.
pub trait Accepts<P: WellKnownParameter> {
    /// Sets the parameter, replacing any previous value of the same kind.
    fn set(&mut self, parameter: P);

    fn get(&self) -> Option<&P>;
}

/// The optional parameters of one request type.
pub trait ParameterList: Clone + fmt::Debug + Default + PartialEq + Send + Sync {
    /// Calls `f` with the name and value of every parameter that is set,
    /// in declaration order.
    fn visit(&self, f: &mut dyn FnMut(&'static str, String));

    /// Returns the `(name, value)` pairs of the parameters that are set.
    fn set_parameters(&self) -> Vec<(&'static str, String)> {
        let mut set = Vec::new();
        self.visit(&mut |name, value| set.push((name, value)));
        set
    }

    /// Comma separated `name=value` dump of the parameters that are set.
    fn dump(&self) -> String {
        self.set_parameters()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Adds every parameter that is set to the query string of a request.
    fn add_to_query(&self, query: &mut Multimap) {
        self.visit(&mut |name, value| query.add(name, value));
    }
}

/// Writes `sep name=value` for each parameter that is set.
pub fn dump_parameters<L: ParameterList>(
    f: &mut fmt::Formatter<'_>,
    list: &L,
    sep: &str,
) -> fmt::Result {
    for (name, value) in list.set_parameters() {
        write!(f, "{sep}{name}={value}")?;
    }
    Ok(())
}

/// A group of parameters that can be applied to the list `L` in one call.
///
/// Implemented for `()` and for tuples of up to eight parameters, each of
/// which must be accepted by `L`.
pub trait ParameterSet<L> {
    fn apply_to(self, list: &mut L);
}

impl<L> ParameterSet<L> for () {
    fn apply_to(self, _list: &mut L) {}
}

macro_rules! impl_parameter_set_for_tuple {
    ($($p:ident => $v:ident),+) => {
        impl<L, $($p),+> ParameterSet<L> for ($($p,)+)
        where
            $($p: WellKnownParameter, L: Accepts<$p>,)+
        {
            fn apply_to(self, list: &mut L) {
                let ($($v,)+) = self;
                $(<L as Accepts<$p>>::set(list, $v);)+
            }
        }
    };
}

impl_parameter_set_for_tuple!(P1 => p1);
impl_parameter_set_for_tuple!(P1 => p1, P2 => p2);
impl_parameter_set_for_tuple!(P1 => p1, P2 => p2, P3 => p3);
impl_parameter_set_for_tuple!(P1 => p1, P2 => p2, P3 => p3, P4 => p4);
impl_parameter_set_for_tuple!(P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5);
impl_parameter_set_for_tuple!(P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5, P6 => p6);
impl_parameter_set_for_tuple!(
    P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5, P6 => p6, P7 => p7
);
impl_parameter_set_for_tuple!(
    P1 => p1, P2 => p2, P3 => p3, P4 => p4, P5 => p5, P6 => p6, P7 => p7, P8 => p8
);

/// Common interface of every request carrying optional parameters.
pub trait GenericRequest: Sized {
    type Parameters: ParameterList;

    fn parameters(&self) -> &Self::Parameters;

    fn parameters_mut(&mut self) -> &mut Self::Parameters;

    fn set_parameter<P>(&mut self, parameter: P) -> &mut Self
    where
        P: WellKnownParameter,
        Self::Parameters: Accepts<P>,
    {
        <Self::Parameters as Accepts<P>>::set(self.parameters_mut(), parameter);
        self
    }

    fn set_multiple_parameters<S>(&mut self, parameters: S) -> &mut Self
    where
        S: ParameterSet<Self::Parameters>,
    {
        parameters.apply_to(self.parameters_mut());
        self
    }

    /// By-value form of [`set_parameter`](Self::set_parameter).
    fn with<P>(mut self, parameter: P) -> Self
    where
        P: WellKnownParameter,
        Self::Parameters: Accepts<P>,
    {
        self.set_parameter(parameter);
        self
    }

    /// By-value form of [`set_multiple_parameters`](Self::set_multiple_parameters).
    fn with_parameters<S>(mut self, parameters: S) -> Self
    where
        S: ParameterSet<Self::Parameters>,
    {
        self.set_multiple_parameters(parameters);
        self
    }

    fn get_parameter<P>(&self) -> Option<&P>
    where
        P: WellKnownParameter,
        Self::Parameters: Accepts<P>,
    {
        <Self::Parameters as Accepts<P>>::get(self.parameters())
    }
}

/// Declares the closed list of optional parameters accepted by a request.
///
/// The field order is the order used by [`ParameterList::visit`], and hence
/// by debug dumps and the wire encoding.
macro_rules! parameter_list {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:ident: $param:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name {
            $($field: Option<$param>,)+
        }

        $(
            impl $crate::storage::types::Accepts<$param> for $name {
                fn set(&mut self, parameter: $param) {
                    self.$field = Some(parameter);
                }

                fn get(&self) -> Option<&$param> {
                    self.$field.as_ref()
                }
            }
        )+

        impl $crate::storage::types::ParameterList for $name {
            fn visit(&self, f: &mut dyn FnMut(&'static str, String)) {
                $(
                    if let Some(p) = &self.$field {
                        f(
                            <$param as $crate::storage::types::WellKnownParameter>::NAME,
                            $crate::storage::types::WellKnownParameter::wire_value(p),
                        );
                    }
                )+
            }
        }
    };
}

/// Implements [`GenericRequest`] for a request whose optional parameters
/// live in a field named `parameters`.
macro_rules! impl_generic_request {
    ($request:ty, $parameters:ty) => {
        impl $crate::storage::types::GenericRequest for $request {
            type Parameters = $parameters;

            fn parameters(&self) -> &Self::Parameters {
                &self.parameters
            }

            fn parameters_mut(&mut self) -> &mut Self::Parameters {
                &mut self.parameters
            }
        }
    };
}

pub(crate) use impl_generic_request;
pub(crate) use parameter_list;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::{
        IfGenerationMatch, IfMetagenerationMatch, MaxResults, Prefix, UserProject,
    };

    parameter_list! {
        struct TestParameters {
            if_generation_match: IfGenerationMatch,
            if_metageneration_match: IfMetagenerationMatch,
            max_results: MaxResults,
            prefix: Prefix,
            user_project: UserProject,
        }
    }

    #[derive(Debug, Default)]
    struct TestRequest {
        parameters: TestParameters,
    }

    impl_generic_request!(TestRequest, TestParameters);

    #[test]
    fn test_empty_dump() {
        let request = TestRequest::default();
        assert_eq!(request.parameters().dump(), "");
        assert!(request.parameters().set_parameters().is_empty());
    }

    #[test]
    fn test_dump_uses_declaration_order() {
        let mut request = TestRequest::default();
        request.set_multiple_parameters((
            UserProject::new("p"),
            Prefix::new("logs/"),
            IfGenerationMatch::new(3),
        ));
        assert_eq!(
            request.parameters().dump(),
            "ifGenerationMatch=3, prefix=logs/, userProject=p"
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut request = TestRequest::default();
        request
            .set_parameter(MaxResults::new(10))
            .set_parameter(MaxResults::new(20));
        assert_eq!(request.get_parameter::<MaxResults>(), Some(&MaxResults::new(20)));
        assert_eq!(request.parameters().dump(), "maxResults=20");
    }

    #[test]
    fn test_add_to_query_skips_absent() {
        let request = TestRequest::default().with(IfMetagenerationMatch::new(9));
        let mut query = Multimap::new();
        request.parameters().add_to_query(&mut query);
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("ifMetagenerationMatch"), Some(&"9".to_string()));
    }

    quickcheck! {
        fn prop_dump_contains_exactly_the_set_parameters(
            generation: Option<i64>,
            metageneration: Option<i64>,
            max_results: Option<i64>,
            prefix: Option<String>,
            user_project: Option<String>
        ) -> bool {
            let mut request = TestRequest::default();
            let mut expected = Vec::new();
            // applied in reverse declaration order on purpose
            if let Some(v) = user_project.clone() {
                request.set_parameter(UserProject::new(v));
            }
            if let Some(v) = prefix.clone() {
                request.set_parameter(Prefix::new(v));
            }
            if let Some(v) = max_results {
                request.set_parameter(MaxResults::new(v));
            }
            if let Some(v) = metageneration {
                request.set_parameter(IfMetagenerationMatch::new(v));
            }
            if let Some(v) = generation {
                request.set_parameter(IfGenerationMatch::new(v));
            }
            if let Some(v) = generation {
                expected.push(format!("ifGenerationMatch={v}"));
            }
            if let Some(v) = metageneration {
                expected.push(format!("ifMetagenerationMatch={v}"));
            }
            if let Some(v) = max_results {
                expected.push(format!("maxResults={v}"));
            }
            if let Some(v) = prefix {
                expected.push(format!("prefix={v}"));
            }
            if let Some(v) = user_project {
                expected.push(format!("userProject={v}"));
            }
            request.parameters().dump() == expected.join(", ")
        }
    }
}
