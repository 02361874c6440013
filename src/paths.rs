use std::ffi::OsStr;
use std::path::Path;

use phf::phf_set;

use crate::mode::Mode;

/// Documents known to break under reformatting (escape-handling quirks).
static IGNORED_FILES: phf::Set<&'static str> = phf_set! {
    "bytes.md",
    "sql-constants.md",
};

/// Legacy-version documents are always eligible, wherever they live.
const LEGACY_VERSION_TAG: &str = "v2.1";

/// Decide whether a document is eligible for reformatting.
///
/// `rel` must be relative to the walk root: the default is that only
/// top-level documents are processed, and nested ones are skipped unless
/// their path carries the legacy version tag.
pub fn is_eligible(rel: &Path, mode: &Mode) -> bool {
    if rel.extension().and_then(OsStr::to_str) != Some("md") {
        return false;
    }

    let base = rel.file_name().and_then(OsStr::to_str).unwrap_or_default();
    if IGNORED_FILES.contains(base) || mode.ignore.iter().any(|name| name == base) {
        return false;
    }

    if rel.to_string_lossy().contains(LEGACY_VERSION_TAG) {
        return true;
    }

    // Top-level files are always eligible.
    rel.parent().map_or(true, |p| p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_markdown_eligible() {
        let mode = Mode::default();
        assert!(is_eligible(Path::new("select.md"), &mode));
    }

    #[test]
    fn test_non_markdown_rejected() {
        let mode = Mode::default();
        assert!(!is_eligible(Path::new("select.txt"), &mode));
        assert!(!is_eligible(Path::new("select"), &mode));
        assert!(!is_eligible(Path::new("select.MD"), &mode));
    }

    #[test]
    fn test_ignored_base_names_rejected_even_at_top_level() {
        let mode = Mode::default();
        assert!(!is_eligible(Path::new("bytes.md"), &mode));
        assert!(!is_eligible(Path::new("sql-constants.md"), &mode));
    }

    #[test]
    fn test_ignored_base_names_rejected_under_version_tag() {
        let mode = Mode::default();
        assert!(!is_eligible(Path::new("v2.1/bytes.md"), &mode));
    }

    #[test]
    fn test_nested_markdown_rejected() {
        let mode = Mode::default();
        assert!(!is_eligible(Path::new("archive/select.md"), &mode));
        assert!(!is_eligible(Path::new("a/b/c/select.md"), &mode));
    }

    #[test]
    fn test_version_tag_overrides_nesting() {
        let mode = Mode::default();
        assert!(is_eligible(Path::new("v2.1/select.md"), &mode));
        assert!(is_eligible(Path::new("releases/v2.1/select.md"), &mode));
    }

    #[test]
    fn test_config_ignore_additions() {
        let mut mode = Mode::default();
        mode.ignore.push("changelog.md".to_string());
        assert!(!is_eligible(Path::new("changelog.md"), &mode));
        assert!(is_eligible(Path::new("other.md"), &mode));
    }
}
