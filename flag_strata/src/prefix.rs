//! Application prefix shared by environment lookups and the default file name.

use std::fmt;

/// Prefix namespacing one application's environment variables and its
/// default configuration file.
///
/// The prefix is kept exactly as supplied: `APP_` matches `APP_port` but not
/// `app_port`, and names the default file `APP_.yml`.
///
/// # Examples
///
/// ```rust
/// use flag_strata::Prefix;
/// let prefix = Prefix::new("MYAPP_");
/// assert_eq!(prefix.default_file_name(), "MYAPP_.yml");
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Creates a prefix from the raw string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the prefix as provided.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the default configuration file, `<prefix>.yml`.
    #[must_use]
    pub fn default_file_name(&self) -> String {
        format!("{}.yml", self.0)
    }
}

impl From<&str> for Prefix {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Prefix {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
