//! Environment variable reader.

use figment::providers::Env;

use crate::{Origin, Prefix, ResolvedMap};

/// How the prefix is removed from a matching variable name.
///
/// # Examples
///
/// ```rust
/// use flag_strata::{Prefix, PrefixStrip, env_key};
///
/// let prefix = Prefix::new("AB");
/// assert_eq!(
///     env_key(&prefix, PrefixStrip::Literal, "ABABfoo").as_deref(),
///     Some("ABfoo")
/// );
/// assert_eq!(
///     env_key(&prefix, PrefixStrip::CharClass, "ABABfoo").as_deref(),
///     Some("foo")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum PrefixStrip {
    /// Remove exactly the prefix string once.
    #[default]
    Literal,
    /// Remove every leading character that occurs anywhere in the prefix.
    ///
    /// This over-strips names such as `ABABfoo` for the prefix `AB`, and
    /// `APP_PORT` for `APP_` becomes `ORT`. Kept for configurations written
    /// against that behaviour.
    CharClass,
}

/// Derive the setting name for the variable `name`.
///
/// Returns `None` when `name` does not start with the prefix (compared
/// case-sensitively) or nothing is left once the prefix is removed.
#[must_use]
pub fn env_key(prefix: &Prefix, strip: PrefixStrip, name: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix.as_str())?;
    let key = match strip {
        PrefixStrip::Literal => rest,
        PrefixStrip::CharClass => name.trim_start_matches(|c| prefix.as_str().contains(c)),
    };
    (!key.is_empty()).then(|| key.to_owned())
}

/// Merge the variables in `vars` that carry the prefix into `into`.
pub fn read_env_vars<I, K, V>(
    prefix: &Prefix,
    strip: PrefixStrip,
    vars: I,
    into: &mut ResolvedMap,
) where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    for (name, value) in vars {
        let var = name.as_ref();
        if let Some(key) = env_key(prefix, strip, var) {
            into.insert(key, value, Origin::Env(var.to_owned()));
        }
    }
}

/// Merge the process environment into `into`.
///
/// Names keep their case and values are taken verbatim. Variables whose
/// name or value is not valid Unicode are skipped.
pub fn read_env(prefix: &Prefix, strip: PrefixStrip, into: &mut ResolvedMap) {
    let env = Env::raw().lowercase(false);
    let vars = env
        .iter()
        .map(|(name, value)| (name.as_str().to_owned(), value));
    read_env_vars(prefix, strip, vars, into);
}
