use anyhow::Result;

use crate::vectors::Vector;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    pub fn ensure_passed(self) -> Result<Self> {
        if self.failed > 0 {
            anyhow::bail!(
                "{} of {} vectors failed",
                self.failed,
                self.passed + self.failed
            );
        }
        Ok(self)
    }
}

/// Checks every vector against the mixers. Mismatches are counted and logged;
/// a malformed vector aborts the run.
pub fn run(vectors: &[Vector]) -> Result<Report> {
    let mut report = Report::default();

    for vector in vectors {
        let expected = vector.expected()?;
        let actual = vector.compute()?;

        if expected == actual {
            tracing::debug!(
                "{:?} {:?} seed {} -> {actual:#x}",
                vector.algorithm,
                vector.input,
                vector.seed
            );
            report.passed += 1;
        } else {
            tracing::error!(
                "{:?} {:?} seed {} -> {actual:#x}, expected {expected:#x}",
                vector.algorithm,
                vector.input,
                vector.seed
            );
            report.failed += 1;
        }
    }

    tracing::info!(
        "Self test done, {} passed, {} failed",
        report.passed,
        report.failed
    );

    Ok(report)
}
