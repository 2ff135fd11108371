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

//! Build request paths from segments.
//!
//! Request paths are relative to the API root, e.g. `channels/123/messages`.
//! They are formed by joining fixed keywords and caller supplied identifiers
//! with `/`. The segments are never reordered, deduplicated, or encoded. Values
//! that may contain reserved characters, such as emoji, must be encoded with
//! [encode_segment] before they are used as a segment.

use crate::Result;
use crate::error::{Error, PathError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The characters escaped when encoding a single path component.
///
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
/// This matches the behavior of `encodeURIComponent()` in web browsers, which
/// is what the service expects for emoji in reaction paths.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters that cannot appear, unescaped, in a single segment.
const RESERVED: [char; 3] = ['/', '?', '#'];

/// Percent-encodes a user-controlled value so it can be used as one segment.
///
/// # Example
/// ```
/// use discord_actions_base::path::encode_segment;
/// assert_eq!(encode_segment("🔥"), "%F0%9F%94%A5");
/// assert_eq!(encode_segment("party_parrot:123"), "party_parrot%3A123");
/// ```
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Joins `segments` with `/`, in order.
///
/// Returns an error if any segment is empty, or if any segment contains a
/// `/`, `?`, or `#` character.
///
/// # Example
/// ```
/// use discord_actions_base::path::build_path;
/// # fn main() -> discord_actions_base::Result<()> {
/// assert_eq!(build_path(&["channels", "123", "messages"])?, "channels/123/messages");
/// assert!(build_path(&["channels", "", "messages"]).is_err());
/// # Ok(()) }
/// ```
pub fn build_path<S: AsRef<str>>(segments: &[S]) -> Result<String> {
    let mut path = String::new();
    for (index, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        check_segment(segments, index, segment)?;
        if index != 0 {
            path.push('/');
        }
        path.push_str(segment);
    }
    Ok(path)
}

fn check_segment<S: AsRef<str>>(segments: &[S], index: usize, segment: &str) -> Result<()> {
    if segment.is_empty() {
        let after = index
            .checked_sub(1)
            .and_then(|i| segments.get(i))
            .map(|s| s.as_ref().to_string());
        return Err(Error::binding(PathError::EmptySegment { index, after }));
    }
    if let Some(character) = segment.chars().find(|c| RESERVED.contains(c)) {
        return Err(Error::binding(PathError::ReservedCharacter {
            index,
            segment: segment.to_string(),
            character,
        }));
    }
    Ok(())
}
