//! YAML decoding backed by `serde-saphyr`.

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;
use serde_saphyr::Options;

fn options() -> Options {
    Options {
        strict_booleans: true,
        ..Options::default()
    }
}

/// Parse YAML into a JSON value using strict boolean semantics, so `yes`
/// and `on` stay strings instead of turning into booleans.
pub(super) fn parse_value(contents: &str) -> Result<JsonValue, serde_saphyr::Error> {
    if contents.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    serde_saphyr::from_str_with_options(contents, options())
}

/// Parse a flat YAML mapping keeping every scalar's source text.
///
/// `1.10`, `0755` and `0x1F` come back exactly as written. Null values map to
/// `None`. Callers check the document shape with [`parse_value`] first.
pub(super) fn parse_scalar_text(
    contents: &str,
) -> Result<BTreeMap<String, Option<String>>, serde_saphyr::Error> {
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let document: Option<BTreeMap<String, Option<String>>> =
        serde_saphyr::from_str_with_options(contents, options())?;
    Ok(document.unwrap_or_default())
}
