//! Per-file install outcomes for one `add` session

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// What happened to one destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Written,
    SkippedExists,
    Overwritten,
    Failed(String),
}

impl InstallOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, InstallOutcome::Failed(_))
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::Written => write!(f, "written"),
            InstallOutcome::SkippedExists => write!(f, "skipped (exists)"),
            InstallOutcome::Overwritten => write!(f, "overwritten"),
            InstallOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub component: String,
    /// Destination relative to the project root
    pub path: PathBuf,
    pub outcome: InstallOutcome,
}

/// Tally of outcomes by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub written: usize,
    pub skipped: usize,
    pub overwritten: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub files: Vec<FileReport>,
}

impl SessionReport {
    pub fn push(&mut self, component: &str, path: PathBuf, outcome: InstallOutcome) {
        self.files.push(FileReport {
            component: component.to_string(),
            path,
            outcome,
        });
    }

    pub fn counts(&self) -> OutcomeCounts {
        self.files
            .iter()
            .fold(OutcomeCounts::default(), |mut counts, file| {
                match file.outcome {
                    InstallOutcome::Written => counts.written += 1,
                    InstallOutcome::SkippedExists => counts.skipped += 1,
                    InstallOutcome::Overwritten => counts.overwritten += 1,
                    InstallOutcome::Failed(_) => counts.failed += 1,
                }
                counts
            })
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome.is_failure())
    }

    /// True when at least one component was attempted and each one had every
    /// file fail
    pub fn all_components_failed(&self) -> bool {
        let mut by_component: BTreeMap<&str, bool> = BTreeMap::new();
        for file in &self.files {
            let all_failed = by_component.entry(file.component.as_str()).or_insert(true);
            *all_failed &= file.outcome.is_failure();
        }
        !by_component.is_empty() && by_component.values().all(|failed| *failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(entries: &[(&str, InstallOutcome)]) -> SessionReport {
        let mut report = SessionReport::default();
        for (i, (component, outcome)) in entries.iter().enumerate() {
            report.push(component, PathBuf::from(format!("f{i}.ts")), outcome.clone());
        }
        report
    }

    #[test]
    fn test_counts() {
        let r = report(&[
            ("a", InstallOutcome::Written),
            ("a", InstallOutcome::SkippedExists),
            ("b", InstallOutcome::Overwritten),
            ("b", InstallOutcome::Failed("denied".into())),
        ]);
        assert_eq!(
            r.counts(),
            OutcomeCounts {
                written: 1,
                skipped: 1,
                overwritten: 1,
                failed: 1
            }
        );
        assert_eq!(r.failures().count(), 1);
        assert!(!r.all_components_failed());
    }

    #[test]
    fn test_all_components_failed() {
        let r = report(&[
            ("a", InstallOutcome::Failed("x".into())),
            ("b", InstallOutcome::Failed("y".into())),
        ]);
        assert!(r.all_components_failed());
        assert!(!SessionReport::default().all_components_failed());
    }

    #[test]
    fn test_partial_component_failure_is_not_total() {
        let r = report(&[
            ("a", InstallOutcome::Failed("x".into())),
            ("a", InstallOutcome::Written),
        ]);
        assert!(!r.all_components_failed());
    }
}
