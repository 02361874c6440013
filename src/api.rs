use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::error::{MdsqlfmtError, Result};
use crate::extract;
use crate::mode::Mode;
use crate::paths;
use crate::report::{FileResult, FileStatus, Report};

/// Run the reformatter over a collection of files and directories.
///
/// Directories are walked recursively and filtered through the path
/// rules; explicit file arguments are filtered on their base name only.
/// The first read, write, or walk error aborts the whole run.
pub fn run(inputs: &[PathBuf], mode: &Mode) -> Result<Report> {
    let files = collect_doc_files(inputs, mode)?;

    let progress = if mode.progress(files.len()) {
        Some(ProgressBar::new(files.len() as u64))
    } else {
        None
    };

    let mut report = Report::new();
    for path in &files {
        report.add(reformat_file(path, mode)?);
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    Ok(report)
}

/// Reformat a single document in place.
///
/// The file is rewritten only when extraction changes its bytes, so an
/// untouched document keeps its modification time. Writing through the
/// existing file preserves its permissions.
fn reformat_file(path: &Path, mode: &Mode) -> Result<FileResult> {
    let original = std::fs::read(path).map_err(|e| MdsqlfmtError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let formatted = extract::reformat_document(&original, mode);

    if formatted == original {
        return Ok(FileResult {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
        });
    }

    if mode.diff {
        print_diff(path, &original, &formatted);
    }
    if mode.check {
        return Ok(FileResult {
            path: path.to_path_buf(),
            status: FileStatus::Changed,
        });
    }

    std::fs::write(path, &formatted).map_err(|e| MdsqlfmtError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(FileResult {
        path: path.to_path_buf(),
        status: FileStatus::Changed,
    })
}

/// Collect every eligible document under the given inputs, in sorted
/// order.
fn collect_doc_files(inputs: &[PathBuf], mode: &Mode) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for input in inputs {
        if input.is_file() {
            let base = input.file_name().map(PathBuf::from).unwrap_or_default();
            if paths::is_eligible(&base, mode) {
                found.push(input.clone());
            }
        } else if input.is_dir() {
            walk(input, input, mode, &mut found)?;
        } else {
            return Err(MdsqlfmtError::Walk {
                path: input.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

/// Recursively collect eligible documents from a directory. Eligibility
/// is judged on the path relative to the walk root.
fn walk(root: &Path, dir: &Path, mode: &Mode, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| MdsqlfmtError::Walk {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| MdsqlfmtError::Walk {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Skip hidden entries and excluded patterns
        if name.starts_with('.') {
            continue;
        }
        if mode.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(&name))
                .unwrap_or(false)
        }) {
            continue;
        }

        if path.is_dir() {
            walk(root, &path, mode, found)?;
        } else {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            if paths::is_eligible(rel, mode) {
                found.push(path);
            }
        }
    }

    Ok(())
}

/// Print a diff between original and reformatted content.
fn print_diff(path: &Path, original: &[u8], formatted: &[u8]) {
    use similar::{ChangeTag, TextDiff};

    eprintln!("--- {}", path.display());
    eprintln!("+++ {}", path.display());

    let original = String::from_utf8_lossy(original);
    let formatted = String::from_utf8_lossy(formatted);
    let diff = TextDiff::from_lines(original.as_ref(), formatted.as_ref());
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        eprint!("{}{}", sign, change);
    }
}
