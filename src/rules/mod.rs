//! Staging policy rules.
//!
//! Each rule inspects one intercepted command and reports zero or more
//! violations. A hook invocation runs exactly one rule, picked by [`Check`].

/// Blanket staging (`git add .`, `-A`, `-a`, `--all`).
pub mod blanket;
/// Unresolved merge conflict markers in staged files.
pub mod conflict;
/// Basename glob lists (debug artifacts, sensitive files).
pub mod name_glob;
/// File size threshold.
pub mod size;

use crate::config::Config;
use crate::eval::{Check, Scope, StagingContext, Violation};

pub use blanket::BlanketStagingRule;
pub use conflict::ConflictMarkerRule;
pub use name_glob::NameGlobRule;
pub use size::SizeThresholdRule;

/// Trait for staging policy rules.
///
/// `inspect` must be free of hidden state: the same command against the same
/// file system yields the same violations.
pub trait StagingRule: Send + Sync {
    /// Whether findings refuse only the offending files or the whole command.
    fn scope(&self) -> Scope;
    /// First line of the block reason.
    fn header(&self) -> &str;
    /// Last line of the block reason.
    fn remediation(&self) -> &str;
    /// Report violations in operand order.
    fn inspect(&self, ctx: &StagingContext) -> Vec<Violation>;
}

/// Construct the rule for `check` from configuration.
pub fn build(check: Check, config: &Config) -> Box<dyn StagingRule> {
    match check {
        Check::GitAddAll => Box::new(BlanketStagingRule::new()),
        Check::DebugArtifacts => Box::new(NameGlobRule::debug_artifacts(
            &config.debug_artifacts.patterns,
        )),
        Check::SensitiveFiles => Box::new(NameGlobRule::sensitive_files(
            &config.sensitive_files.patterns,
        )),
        Check::LargeFiles => Box::new(SizeThresholdRule::new(config.large_files.threshold_bytes)),
        Check::MergeConflicts => Box::new(ConflictMarkerRule),
    }
}
