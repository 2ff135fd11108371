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

//! Errors returned while building or sending actions.
//!
//! Every fallible function in these crates returns [Error]. The error kind can
//! be queried with predicates such as [Error::is_binding] or
//! [Error::is_invalid_parameters], and the [source][std::error::Error::source]
//! contains the details, typically a [PathError] or an [InvalidParameters].

mod core_error;
pub use core_error::*;

mod path;
pub use path::PathError;

mod parameters;
pub use parameters::InvalidParameters;
