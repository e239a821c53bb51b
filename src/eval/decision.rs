use serde::Serialize;

/// How a rule's findings translate into a refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only offending operands are named; the agent may re-stage the rest.
    PerFile,
    /// Any finding refuses the whole command, clean operands included.
    WholeCommand,
}

/// What a rule found about one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Basename matched this glob (first match in declaration order).
    Pattern(String),
    /// File size in bytes, at or above the threshold.
    Size(u64),
    /// File contains a line starting with a conflict marker.
    ConflictMarker,
    /// Command stages everything (`.`, `-A`, `-a`, `--all`).
    Blanket,
}

/// One rule finding about one operand (or about the whole command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub subject: String,
    pub finding: Finding,
}

impl Violation {
    pub fn new(subject: impl Into<String>, finding: Finding) -> Self {
        Self {
            subject: subject.into(),
            finding,
        }
    }

    /// The indented detail line used in block reasons.
    pub fn detail_line(&self) -> String {
        match &self.finding {
            Finding::Pattern(pattern) => format!("  - {} (matches {pattern})", self.subject),
            Finding::Size(bytes) => {
                let mb = *bytes as f64 / (1024.0 * 1024.0);
                format!("  - {} ({mb:.1} MB)", self.subject)
            }
            Finding::ConflictMarker | Finding::Blanket => format!("  - {}", self.subject),
        }
    }
}

/// Outcome of one interception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the command run unmodified. Nothing is written.
    Allow,
    /// Refuse the command.
    Block(BlockReason),
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Block(_) => "block",
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// The joined reason text; empty for `Allow`.
    pub fn reason(&self) -> String {
        match self {
            Decision::Allow => String::new(),
            Decision::Block(r) => r.text(),
        }
    }
}

/// Header, one line per violation, optional held-back line, remediation footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReason {
    pub lines: Vec<String>,
}

impl BlockReason {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Wire form of a block decision.
#[derive(Debug, Serialize)]
pub struct HookResponse<'a> {
    pub decision: &'static str,
    pub reason: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_detail_line() {
        let v = Violation::new("app.log", Finding::Pattern("*.log".into()));
        assert_eq!(v.detail_line(), "  - app.log (matches *.log)");
    }

    #[test]
    fn size_detail_line_one_decimal() {
        let v = Violation::new("big.bin", Finding::Size(5 * 1024 * 1024));
        assert_eq!(v.detail_line(), "  - big.bin (5.0 MB)");
        let v = Violation::new("bigger.bin", Finding::Size(7_864_320));
        assert_eq!(v.detail_line(), "  - bigger.bin (7.5 MB)");
    }

    #[test]
    fn bare_detail_lines() {
        assert_eq!(
            Violation::new("a.py", Finding::ConflictMarker).detail_line(),
            "  - a.py"
        );
        assert_eq!(Violation::new("-A", Finding::Blanket).detail_line(), "  - -A");
    }

    #[test]
    fn allow_has_no_reason() {
        assert_eq!(Decision::Allow.reason(), "");
        assert_eq!(Decision::Allow.as_str(), "allow");
        assert!(!Decision::Allow.is_block());
    }

    #[test]
    fn block_reason_joins_lines() {
        let d = Decision::Block(BlockReason {
            lines: vec!["head".into(), "  - x".into(), "foot".into()],
        });
        assert!(d.is_block());
        assert_eq!(d.reason(), "head\n  - x\nfoot");
    }
}
