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

/// Scalars that can be formatted as a single query parameter value.
///
/// Structured values, such as JSON objects, are not request parameters. The
/// catalog flattens them into scalars before adding them to a query.
pub trait RequestParameter {
    fn format(&self) -> String;
}

macro_rules! display_parameter {
    ($($t:ty),* $(,)?) => {
        $(
            impl RequestParameter for $t {
                fn format(&self) -> String {
                    format!("{self}")
                }
            }
        )*
    };
}

display_parameter!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, bool);

impl RequestParameter for String {
    fn format(&self) -> String {
        self.clone()
    }
}

impl RequestParameter for &str {
    fn format(&self) -> String {
        (*self).to_string()
    }
}
