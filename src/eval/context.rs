use crate::parse::{self, StagingInvocation};

/// Everything a rule may inspect about one intercepted command.
#[derive(Debug)]
pub struct StagingContext<'a> {
    /// The raw command text, exactly as the agent sent it.
    pub raw: &'a str,
    /// The classified `git add` invocation, if the command is one.
    pub staging: Option<StagingInvocation>,
}

impl<'a> StagingContext<'a> {
    /// Build a StagingContext from a raw command string.
    pub fn from_command(raw: &'a str) -> Self {
        Self {
            raw,
            staging: parse::classify(raw),
        }
    }

    /// Whether the command is a `git add` invocation.
    pub fn is_staging(&self) -> bool {
        self.staging.is_some()
    }

    /// File operands in command order; empty when not a `git add`.
    pub fn operands(&self) -> &[String] {
        self.staging
            .as_ref()
            .map(|s| s.operands.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_operands() {
        let ctx = StagingContext::from_command("git add -p a.txt b.txt");
        assert!(ctx.is_staging());
        assert_eq!(ctx.operands(), ["a.txt", "b.txt"]);
    }

    #[test]
    fn non_staging_has_no_operands() {
        let ctx = StagingContext::from_command("git status");
        assert!(!ctx.is_staging());
        assert!(ctx.operands().is_empty());
        assert_eq!(ctx.raw, "git status");
    }
}
