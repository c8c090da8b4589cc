//! Per-call resolution settings and the configuration file list.

use std::path::{Path, PathBuf};

use dirs::home_dir;

use crate::{Prefix, PrefixStrip};

/// Directory below the home directory that holds default configuration files.
pub const DEFAULT_CONFIG_DIR: &str = ".flagconf";

/// Ordered configuration files, weakest first.
///
/// # Examples
///
/// ```rust
/// use flag_strata::{FileList, Prefix};
/// use std::path::Path;
///
/// let files = FileList::default_for(&Prefix::new("APP_"), Some(Path::new("/home/me")));
/// assert_eq!(
///     files.iter().collect::<Vec<_>>(),
///     [Path::new("/home/me/.flagconf/APP_.yml")]
/// );
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FileList(Vec<PathBuf>);

impl FileList {
    /// Creates a list from paths in increasing precedence.
    #[must_use]
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    /// The list used when the caller sets none:
    /// `<home>/.flagconf/<prefix>.yml`, or nothing without a home directory.
    #[must_use]
    pub fn default_for(prefix: &Prefix, home: Option<&Path>) -> Self {
        home.map_or_else(Self::default, |dir| {
            Self(vec![
                dir.join(DEFAULT_CONFIG_DIR)
                    .join(prefix.default_file_name()),
            ])
        })
    }

    /// Appends `path` as the strongest file.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.0.push(path.into());
    }

    /// Iterates paths, weakest first.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for FileList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Locate the user's home directory.
///
/// Mirrors shell expectations by preferring `HOME`, then `USERPROFILE`, and
/// only then the platform lookup.
#[must_use]
pub fn user_home() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(std::env::var_os)
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(home_dir)
}

/// Settings for one resolution call.
///
/// Every call receives its own options, so concurrent or repeated calls with
/// different file lists do not interfere.
///
/// # Examples
///
/// ```rust
/// use flag_strata::{PrefixStrip, ResolveOptions};
///
/// let options = ResolveOptions::new()
///     .with_files(["/etc/app.yml", "./app.json"])
///     .with_prefix_strip(PrefixStrip::CharClass)
///     .with_confirmation(true);
/// assert!(options.requires_confirmation());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    files: Option<FileList>,
    confirm: bool,
    strip: PrefixStrip,
    home: Option<PathBuf>,
}

impl ResolveOptions {
    /// Options with the default file list, no confirmation and literal prefix
    /// stripping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default file list. An empty list disables file lookup.
    #[must_use]
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = Some(FileList::new(files));
        self
    }

    /// Always ask the operator to confirm the resolved values, even when the
    /// `strata_confirm` setting is off.
    #[must_use]
    pub fn with_confirmation(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    /// Choose how prefixes are removed from environment variable names.
    #[must_use]
    pub fn with_prefix_strip(mut self, strip: PrefixStrip) -> Self {
        self.strip = strip;
        self
    }

    /// Use `home` instead of [`user_home`] when building the default list.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// The file list in effect for `prefix`.
    #[must_use]
    pub fn file_list(&self, prefix: &Prefix) -> FileList {
        self.files.clone().unwrap_or_else(|| {
            let home = self.home.clone().or_else(user_home);
            FileList::default_for(prefix, home.as_deref())
        })
    }

    /// Whether confirmation was requested programmatically.
    #[must_use]
    pub const fn requires_confirmation(&self) -> bool {
        self.confirm
    }

    /// The configured prefix stripping mode.
    #[must_use]
    pub const fn prefix_strip(&self) -> PrefixStrip {
        self.strip
    }
}
