use glob::Pattern;

use crate::eval::{Finding, Scope, StagingContext, Violation};
use crate::parse::basename;
use crate::rules::StagingRule;

/// Refuses operands whose basename matches a configured glob.
///
/// Patterns are tried in declaration order and the first match is reported.
/// `*` and `?` match any characters, including a leading dot; matching is
/// case-sensitive and never looks at directory components.
#[derive(Debug)]
pub struct NameGlobRule {
    patterns: Vec<(String, Pattern)>,
    header: &'static str,
    remediation: &'static str,
}

impl NameGlobRule {
    /// Build a rule over `patterns`. Patterns that fail to compile are skipped.
    pub fn new(patterns: &[String], header: &'static str, remediation: &'static str) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|raw| match Pattern::new(raw) {
                Ok(p) => Some((raw.clone(), p)),
                Err(e) => {
                    log::warn!("skipping invalid glob {raw:?}: {e}");
                    None
                }
            })
            .collect();
        Self {
            patterns,
            header,
            remediation,
        }
    }

    /// Build/debug leftovers: logs, temp files, debug dumps.
    pub fn debug_artifacts(patterns: &[String]) -> Self {
        Self::new(
            patterns,
            "Debug artifacts detected — remove them from the git add command and skip them:",
            "Stage only the non-artifact files instead.",
        )
    }

    /// Secrets: env files, keys, credentials.
    pub fn sensitive_files(patterns: &[String]) -> Self {
        Self::new(
            patterns,
            "Sensitive files detected — remove them from the git add command and skip them:",
            "Stage only the non-sensitive files instead.",
        )
    }

    /// First pattern (in declaration order) matching the operand's basename.
    pub fn first_match(&self, path: &str) -> Option<&str> {
        let name = basename(path);
        self.patterns
            .iter()
            .find(|(_, p)| p.matches(name))
            .map(|(raw, _)| raw.as_str())
    }
}

impl StagingRule for NameGlobRule {
    fn scope(&self) -> Scope {
        Scope::PerFile
    }

    fn header(&self) -> &str {
        self.header
    }

    fn remediation(&self) -> &str {
        self.remediation
    }

    fn inspect(&self, ctx: &StagingContext) -> Vec<Violation> {
        ctx.operands()
            .iter()
            .filter_map(|op| {
                self.first_match(op)
                    .map(|pattern| Violation::new(op.as_str(), Finding::Pattern(pattern.to_string())))
            })
            .collect()
    }
}
