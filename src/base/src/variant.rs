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

//! Check the shape of variant-dependent parameters.
//!
//! Some operations accept a different set of fields depending on a
//! discriminating tag. The catalog models these as closed sum types, so most
//! illegal combinations cannot be expressed. Parameters that arrive as loosely
//! typed JSON, for example from a configuration file, are checked with the
//! functions in this module before they are converted to the typed models.

use crate::Result;
use crate::error::{Error, InvalidParameters};
use serde_json::{Map, Value};

/// An enumerated tag that selects which optional fields are legal.
pub trait VariantTag {
    /// The name of the variant, used in error messages.
    fn variant_name(&self) -> &'static str;

    /// The fields accepted by this variant, in addition to the fields common
    /// to all variants.
    fn variant_fields(&self) -> &'static [&'static str];
}

/// Verifies that every key is either common or belongs to the variant.
///
/// The first key that fails the check is reported as
/// [InvalidParameters::IllegalField].
///
/// # Example
/// ```
/// use discord_actions_base::variant::{VariantTag, check_fields};
/// struct Voice;
/// impl VariantTag for Voice {
///     fn variant_name(&self) -> &'static str { "voice" }
///     fn variant_fields(&self) -> &'static [&'static str] { &["bitrate", "user_limit"] }
/// }
/// assert!(check_fields(&Voice, &["name"], ["name", "bitrate"]).is_ok());
/// assert!(check_fields(&Voice, &["name"], ["name", "topic"]).is_err());
/// ```
pub fn check_fields<'a, T, I>(tag: &T, common: &[&str], keys: I) -> Result<()>
where
    T: VariantTag + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let legal = tag.variant_fields();
    match keys
        .into_iter()
        .find(|k| !common.contains(k) && !legal.contains(k))
    {
        None => Ok(()),
        Some(field) => {
            let variant = tag.variant_name();
            tracing::warn!(field, variant, "rejected field for variant");
            Err(Error::invalid_parameters(InvalidParameters::IllegalField {
                field: field.to_string(),
                variant,
            }))
        }
    }
}

/// Verifies the shape of loosely typed parameters.
///
/// `value` must be a JSON object whose keys are all legal for `tag`. Returns
/// the object on success.
pub fn check_object<'v, T>(
    tag: &T,
    common: &[&str],
    value: &'v Value,
) -> Result<&'v Map<String, Value>>
where
    T: VariantTag + ?Sized,
{
    let Value::Object(map) = value else {
        return Err(Error::invalid_parameters(InvalidParameters::NotAnObject {
            variant: tag.variant_name(),
        }));
    };
    check_fields(tag, common, map.keys().map(String::as_str))?;
    Ok(map)
}

/// Converts loosely typed parameters, after checking them, into a model.
///
/// Keys not used by `M` are ignored by the conversion, so the same object can
/// be converted into the common fields and the variant fields separately.
pub fn from_object<T, M>(tag: &T, common: &[&str], value: &Value) -> Result<M>
where
    T: VariantTag + ?Sized,
    M: serde::de::DeserializeOwned,
{
    check_object(tag, common, value)?;
    <M as serde::Deserialize>::deserialize(value).map_err(|source| {
        Error::invalid_parameters(InvalidParameters::Malformed {
            variant: tag.variant_name(),
            source,
        })
    })
}

/// Verifies that at most one member of a mutually exclusive group is set.
///
/// # Example
/// ```
/// use discord_actions_base::variant::exclusive;
/// assert!(exclusive(&[("before", true), ("after", false)]).is_ok());
/// assert!(exclusive(&[("before", true), ("after", true)]).is_err());
/// ```
pub fn exclusive(group: &[(&'static str, bool)]) -> Result<()> {
    let mut set = group.iter().filter(|g| g.1).map(|g| g.0);
    match (set.next(), set.next()) {
        (Some(first), Some(second)) => {
            tracing::warn!(first, second, "rejected mutually exclusive parameters");
            Err(Error::invalid_parameters(InvalidParameters::MutuallyExclusive { first, second }))
        }
        _ => Ok(()),
    }
}
