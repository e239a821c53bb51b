use crate::eval::{Finding, Scope, StagingContext, Violation};
use crate::rules::StagingRule;

/// Refuses regular files at or above a byte threshold.
///
/// Operands that are missing, not regular files, or cannot be stat'ed are
/// skipped: the command may be relative to a directory we cannot see.
#[derive(Debug)]
pub struct SizeThresholdRule {
    threshold_bytes: u64,
}

impl SizeThresholdRule {
    pub fn new(threshold_bytes: u64) -> Self {
        Self { threshold_bytes }
    }

    /// Size of `path` if it is a regular file at or above the threshold.
    fn oversized(&self, path: &str) -> Option<u64> {
        let meta = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                log::debug!("skipping {path}: {e}");
                return None;
            }
        };
        if !meta.is_file() {
            return None;
        }
        (meta.len() >= self.threshold_bytes).then_some(meta.len())
    }
}

impl StagingRule for SizeThresholdRule {
    fn scope(&self) -> Scope {
        Scope::PerFile
    }

    fn header(&self) -> &str {
        "Large files detected — remove them from the git add command and skip them:"
    }

    fn remediation(&self) -> &str {
        "Stage only the non-large files instead."
    }

    fn inspect(&self, ctx: &StagingContext) -> Vec<Violation> {
        ctx.operands()
            .iter()
            .filter_map(|op| {
                self.oversized(op)
                    .map(|bytes| Violation::new(op.as_str(), Finding::Size(bytes)))
            })
            .collect()
    }
}
