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

/// A failure to build the request path.
///
/// Each operation builds its path by joining fixed keywords and caller
/// supplied identifiers. The path cannot be built when an identifier is
/// missing, or when it contains characters that would change the meaning of
/// the URL.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    /// A segment was empty.
    ///
    /// # Parameters
    ///
    /// - `index` - the zero-based position of the segment.
    /// - `after` - the segment preceding the empty one, if any. Typically
    ///   this is the keyword that names the missing identifier, e.g.
    ///   `channels` for a missing channel id.
    EmptySegment {
        index: usize,
        after: Option<String>,
    },
    /// A segment contains a path, query, or fragment delimiter.
    ///
    /// User-controlled values that may contain such characters must be
    /// encoded with [encode_segment][crate::path::encode_segment] first.
    ReservedCharacter {
        index: usize,
        segment: String,
        character: char,
    },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySegment {
                index,
                after: Some(after),
            } => write!(f, "path segment {index} (after `{after}`) is empty"),
            Self::EmptySegment { index, after: None } => {
                write!(f, "path segment {index} is empty")
            }
            Self::ReservedCharacter {
                index,
                segment,
                character,
            } => write!(
                f,
                "path segment {index} (`{segment}`) contains the reserved character `{character}`"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(PathError::EmptySegment { index: 0, after: None }, "path segment 0 is empty")]
    #[test_case(PathError::EmptySegment { index: 1, after: Some("channels".into()) }, "path segment 1 (after `channels`) is empty")]
    #[test_case(PathError::ReservedCharacter { index: 2, segment: "a/b".into(), character: '/' }, "path segment 2 (`a/b`) contains the reserved character `/`")]
    fn display(input: PathError, want: &str) {
        assert_eq!(input.to_string(), want);
    }
}
