//! Copy eligibility by extension and size.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Extensions whose content is copied by default.
pub const DEFAULT_COPY_EXTENSIONS: &[&str] = &[
    "txt", "md", "bas", "c", "cpp", "h", "java", "go", "doc", "docx", "xls", "xlsx",
];

/// Largest file copied by default (50 KiB).
pub const DEFAULT_MAX_COPY_SIZE: u64 = 50 * 1024;

/// Lowercased extension of a file name, without the dot.
///
/// Everything after the last `.`; empty if there is none.
///
/// ```rust,ignore
/// assert_eq!(lowercase_extension("Report.PDF"), "pdf");
/// assert_eq!(lowercase_extension(".bashrc"), "bashrc");
/// assert_eq!(lowercase_extension("Makefile"), "");
/// ```
#[must_use]
pub fn lowercase_extension(name: &str) -> String {
    name.rfind('.')
        .map_or_else(String::new, |i| name[i + 1..].to_lowercase())
}

/// Decides which files get their content copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPolicy {
    extensions: Vec<String>,
    max_size: u64,
}

impl CopyPolicy {
    /// Create a policy. Extensions are lowercased and stripped of a leading dot.
    #[must_use]
    pub fn new<I, S>(extensions: I, max_size: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self {
            extensions: Vec::new(),
            max_size,
        };
        policy.add_extensions(extensions);
        policy
    }

    /// Allow more extensions.
    pub fn add_extensions<I, S>(&mut self, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.').to_lowercase();
            if !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
    }

    /// Change the size ceiling.
    pub const fn set_max_size(&mut self, max_size: u64) {
        self.max_size = max_size;
    }

    /// The size ceiling in bytes (inclusive).
    #[must_use]
    pub const fn max_size(&self) -> u64 {
        self.max_size
    }

    /// The allowed extensions.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether a file's content should be copied.
    ///
    /// Symlinks and directories are never eligible.
    #[must_use]
    pub fn is_eligible(&self, name: &str, is_regular_file: bool, size: u64) -> bool {
        is_regular_file
            && size <= self.max_size
            && self.extensions.contains(&lowercase_extension(name))
    }
}

impl Default for CopyPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_EXTENSIONS, DEFAULT_MAX_COPY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_extension() {
        assert_eq!(lowercase_extension("notes.txt"), "txt");
        assert_eq!(lowercase_extension("Report.PDF"), "pdf");
        assert_eq!(lowercase_extension("archive.tar.GZ"), "gz");
        assert_eq!(lowercase_extension(".bashrc"), "bashrc");
        assert_eq!(lowercase_extension("Makefile"), "");
        assert_eq!(lowercase_extension("trailing."), "");
    }

    #[test]
    fn test_eligible_by_extension_and_size() {
        let policy = CopyPolicy::default();

        assert!(policy.is_eligible("a.txt", true, 10));
        assert!(policy.is_eligible("README.MD", true, 10));
        assert!(policy.is_eligible("a.txt", true, DEFAULT_MAX_COPY_SIZE));
        assert!(!policy.is_eligible("a.txt", true, DEFAULT_MAX_COPY_SIZE + 1));
        assert!(!policy.is_eligible("a.bin", true, 10));
        assert!(!policy.is_eligible("Makefile", true, 10));
    }

    #[test]
    fn test_symlinks_are_not_eligible() {
        let policy = CopyPolicy::default();
        assert!(!policy.is_eligible("link.txt", false, 10));
    }

    #[test]
    fn test_add_extensions_normalizes() {
        let mut policy = CopyPolicy::new(["txt"], 100);
        policy.add_extensions([".RS", "txt"]);

        assert_eq!(policy.extensions(), &["txt".to_string(), "rs".to_string()]);
        assert!(policy.is_eligible("main.rs", true, 100));
    }

    #[test]
    fn test_set_max_size() {
        let mut policy = CopyPolicy::default();
        policy.set_max_size(0);

        assert!(policy.is_eligible("empty.txt", true, 0));
        assert!(!policy.is_eligible("one.txt", true, 1));
    }
}
