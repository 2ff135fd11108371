// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The parameters do not have a valid shape for the operation.
///
/// Some operations accept different fields depending on a discriminating tag,
/// for example, the fields accepted to create a voice channel are not the same
/// as the fields accepted to create a text channel. Other operations accept a
/// group of fields where at most one may be set, such as the pagination
/// cursors.
///
/// Only the shape of the parameters is checked. Value ranges, such as the
/// maximum `limit` for a listing, are left to the service.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum InvalidParameters {
    /// The field is not accepted by this variant.
    #[error("field `{field}` is not valid for the `{variant}` variant")]
    IllegalField {
        field: String,
        variant: &'static str,
    },

    /// The field is accepted by this variant, but not with this value.
    #[error("value `{value}` of field `{field}` is not valid for the `{variant}` variant")]
    IllegalValue {
        field: &'static str,
        value: String,
        variant: &'static str,
    },

    /// Two fields of a mutually exclusive group are set.
    #[error("`{first}` and `{second}` are mutually exclusive, set at most one of them")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    /// The parameters are not a JSON object.
    #[error("the parameters for the `{variant}` variant must be a JSON object")]
    NotAnObject { variant: &'static str },

    /// The fields are accepted by the variant, but their values do not have
    /// the expected types.
    #[error("cannot interpret the parameters for the `{variant}` variant: {source}")]
    Malformed {
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
