//! Immutable package lists.

use serde::Serialize;
use std::fmt;

/// An ordered, immutable list of package names.
///
/// There is no way to push onto a `PackageList` in place. Deriving the build
/// dependencies for one compiler goes through [`PackageList::with_appended`],
/// which returns a new list and leaves the platform's own list untouched, so
/// the packages of one compiler can never leak into the recipe of the next.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PackageList(Vec<String>);

impl PackageList {
    /// Build a list, keeping the given order.
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(packages.into_iter().map(Into::into).collect())
    }

    /// A copy of this list with `package` added at the end.
    #[must_use]
    pub fn with_appended(&self, package: &str) -> Self {
        let mut packages = Vec::with_capacity(self.0.len() + 1);
        packages.extend(self.0.iter().cloned());
        packages.push(package.to_string());
        Self(packages)
    }

    /// Packages joined with single spaces, in list order.
    #[must_use]
    pub fn join(&self) -> String {
        self.0.join(" ")
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.0.iter().any(|p| p == package)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PackageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
