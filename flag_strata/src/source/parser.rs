//! Format detection and flattening of decoded documents.

use serde_json::Value as JsonValue;

use std::path::Path;

use super::yaml;
use crate::error::{file_error, invalid_data};
use crate::{Prefix, StrataResult};

/// Decode `data` according to the extension of `path`.
///
/// `.json` (any case) is JSON; every other extension, or none, is YAML.
/// The document must be a flat mapping of scalars; see [`scalar_to_string`].
/// Values keep the text they were written with, so `1.10` stays `1.10`.
///
/// # Errors
///
/// Returns a [`crate::StrataError::File`] when decoding fails or the
/// document is not a flat mapping.
pub(super) fn parse_config_by_format(
    prefix: &Prefix,
    path: &Path,
    data: &str,
) -> StrataResult<Vec<(String, String)>> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        let value =
            serde_json::from_str::<JsonValue>(data).map_err(|e| file_error(prefix, path, e))?;
        return flatten(prefix, path, value);
    }

    let value = yaml::parse_value(data).map_err(|e| file_error(prefix, path, e))?;
    let shape = flatten(prefix, path, value)?;
    if shape.is_empty() {
        return Ok(shape);
    }
    let text = yaml::parse_scalar_text(data).map_err(|e| file_error(prefix, path, e))?;
    Ok(text
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

fn flatten(
    prefix: &Prefix,
    path: &Path,
    value: JsonValue,
) -> StrataResult<Vec<(String, String)>> {
    let map = match value {
        JsonValue::Object(map) => map,
        JsonValue::Null => return Ok(Vec::new()),
        other => {
            return Err(invalid_data(
                prefix,
                path,
                format!("expected a mapping at the top level, found {}", kind(&other)),
            ));
        }
    };
    map.into_iter()
        .map(|(key, value)| match scalar_to_string(value) {
            Ok(text) => Ok((key, text)),
            Err(found) => Err(invalid_data(
                prefix,
                path,
                format!("value for '{key}' must be a scalar, found {found}"),
            )),
        })
        .collect()
}

/// Render a scalar the way it would be typed on the command line.
///
/// Strings are kept verbatim, booleans and numbers use their source text
/// and null becomes an empty string. Sequences and mappings are rejected
/// with the name of their kind.
pub(super) fn scalar_to_string(value: JsonValue) -> Result<String, &'static str> {
    match value {
        JsonValue::String(text) => Ok(text),
        JsonValue::Bool(flag) => Ok(flag.to_string()),
        JsonValue::Number(number) => Ok(number.to_string()),
        JsonValue::Null => Ok(String::new()),
        other => Err(kind(&other)),
    }
}

const fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
