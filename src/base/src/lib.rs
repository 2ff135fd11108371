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

//! Core types to describe requests against the Discord REST API.
//!
//! This crate contains the pieces shared by every operation in the action
//! catalog: building URL paths from segments, encoding query strings, checking
//! the shape of variant-dependent parameters, and the immutable
//! [ActionDescriptor][descriptor::ActionDescriptor] that results from all of
//! the above.
//!
//! The crate does not perform any network I/O. Applications, or higher level
//! crates, provide an [Executor][executor::Executor] that consumes descriptors
//! and returns the raw response payload.
//!
//! # Example
//! ```
//! use discord_actions_base::descriptor::{ActionDescriptor, Body, Method};
//! use discord_actions_base::query::Query;
//! # fn main() -> discord_actions_base::Result<()> {
//! let query = Query::new().add("limit", &Some(50));
//! let descriptor = ActionDescriptor::build(
//!     Method::Get,
//!     &["channels", "123", "messages"],
//!     Some(&query),
//!     None,
//! )?;
//! assert_eq!(descriptor.path_and_query(), "channels/123/messages?limit=50");
//! # Ok(()) }
//! ```

/// An alias of [std::result::Result] where the error is always [Error][crate::error::Error].
///
/// This is the result type used by all functions wrapping request building and
/// execution.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod action;
pub mod descriptor;
pub mod error;
pub mod executor;
pub(crate) mod observability;
pub mod options;
pub mod path;
pub mod query;
pub mod request_parameter;
pub mod variant;

pub use observability::tracing_enabled;
