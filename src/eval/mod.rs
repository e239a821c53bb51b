pub mod check;
pub mod context;
pub mod decision;

pub use check::Check;
pub use context::StagingContext;
pub use decision::{BlockReason, Decision, Finding, HookResponse, Scope, Violation};

use crate::config::Config;
use crate::rules::{self, StagingRule};

/// One selected check, ready to evaluate commands.
pub struct Gate {
    check: Check,
    rule: Box<dyn StagingRule>,
}

impl Gate {
    /// Build the gate for `check` from configuration.
    pub fn from_config(check: Check, config: &Config) -> Self {
        Self {
            check,
            rule: rules::build(check, config),
        }
    }

    /// Build a gate around an already-constructed rule.
    pub fn with_rule(check: Check, rule: Box<dyn StagingRule>) -> Self {
        Self { check, rule }
    }

    pub fn check(&self) -> Check {
        self.check
    }

    /// Run the rule against a raw command and aggregate its findings.
    pub fn evaluate(&self, command: &str) -> Decision {
        let ctx = StagingContext::from_command(command);
        let violations = self.rule.inspect(&ctx);
        log::debug!(
            "{}: staging={} operands={} violations={}",
            self.check.name(),
            ctx.is_staging(),
            ctx.operands().len(),
            violations.len()
        );
        aggregate(self.rule.as_ref(), &ctx, &violations)
    }
}

/// Turn a rule's ordered findings into a decision.
///
/// No findings means `Allow`. Otherwise the reason is the rule's header, one
/// detail line per violation in encounter order, and the rule's remediation.
/// Whole-command rules also name the clean operands that are held back.
pub fn aggregate(rule: &dyn StagingRule, ctx: &StagingContext, violations: &[Violation]) -> Decision {
    if violations.is_empty() {
        return Decision::Allow;
    }

    let mut lines = Vec::with_capacity(violations.len() + 3);
    lines.push(rule.header().to_string());
    lines.extend(violations.iter().map(Violation::detail_line));

    if rule.scope() == Scope::WholeCommand {
        let held_back: Vec<&str> = ctx
            .operands()
            .iter()
            .filter(|op| !violations.iter().any(|v| &v.subject == *op))
            .map(String::as_str)
            .collect();
        if !held_back.is_empty() {
            lines.push(format!("Also held back: {}", held_back.join(", ")));
        }
    }

    lines.push(rule.remediation().to_string());
    Decision::Block(BlockReason { lines })
}
