use std::path::PathBuf;

/// Status of reformatting a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Extraction produced byte-identical output; the file was not touched.
    Unchanged,
    /// File was rewritten (or would be, in check mode).
    Changed,
}

/// Result of reformatting a single document.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Aggregated results of a run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn unchanged(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == FileStatus::Unchanged)
            .count()
    }

    pub fn changed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == FileStatus::Changed)
            .count()
    }

    pub fn has_changes(&self) -> bool {
        self.changed() > 0
    }

    /// Generate a summary string.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("{} file(s) processed", self.total()));
        if self.changed() > 0 {
            parts.push(format!("{} reformatted", self.changed()));
        }
        if self.unchanged() > 0 {
            parts.push(format!("{} unchanged", self.unchanged()));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_and_summary() {
        let mut report = Report::new();
        report.add(FileResult {
            path: PathBuf::from("a.md"),
            status: FileStatus::Changed,
        });
        report.add(FileResult {
            path: PathBuf::from("b.md"),
            status: FileStatus::Unchanged,
        });

        assert_eq!(report.total(), 2);
        assert_eq!(report.changed(), 1);
        assert_eq!(report.unchanged(), 1);
        assert!(report.has_changes());
        assert_eq!(report.summary(), "2 file(s) processed, 1 reformatted, 1 unchanged");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert_eq!(report.total(), 0);
        assert!(!report.has_changes());
        assert_eq!(report.summary(), "0 file(s) processed");
    }
}
