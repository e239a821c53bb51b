use std::sync::LazyLock;

use regex::Regex;

use crate::eval::{Finding, Scope, StagingContext, Violation};
use crate::rules::StagingRule;

/// `git add`, any run of flag words, then a catch-all target as a whole word.
static BLANKET_ADD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"git\s+add\s+(?:-\S*\s+)*(\.|-A|-a|--all)(?:\s|$)")
        .expect("blanket staging regex must compile")
});

/// Refuses commands that stage the whole tree.
///
/// Matches against the raw command text rather than operands, so it also
/// catches `git add` inside compound commands (`cd repo && git add -A`).
#[derive(Debug, Default)]
pub struct BlanketStagingRule;

impl BlanketStagingRule {
    pub fn new() -> Self {
        Self
    }
}

impl StagingRule for BlanketStagingRule {
    fn scope(&self) -> Scope {
        Scope::WholeCommand
    }

    fn header(&self) -> &str {
        "Blanket staging (git add . / -A / --all) is not allowed:"
    }

    fn remediation(&self) -> &str {
        "Stage specific files instead: git add <file1> <file2> ..."
    }

    fn inspect(&self, ctx: &StagingContext) -> Vec<Violation> {
        BLANKET_ADD
            .captures(ctx.raw)
            .and_then(|caps| caps.get(1))
            .map(|target| vec![Violation::new(target.as_str(), Finding::Blanket)])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(cmd: &str) -> Option<String> {
        let ctx = StagingContext::from_command(cmd);
        BlanketStagingRule::new()
            .inspect(&ctx)
            .into_iter()
            .next()
            .map(|v| v.subject)
    }

    #[test]
    fn blocks_dot() {
        assert_eq!(target("git add .").as_deref(), Some("."));
    }

    #[test]
    fn blocks_dash_a_upper() {
        assert_eq!(target("git add -A").as_deref(), Some("-A"));
    }

    #[test]
    fn blocks_dash_a_lower() {
        assert_eq!(target("git add -a").as_deref(), Some("-a"));
    }

    #[test]
    fn blocks_long_all() {
        assert_eq!(target("git add --all").as_deref(), Some("--all"));
    }

    #[test]
    fn blocks_after_flags() {
        assert_eq!(target("git add -v --force .").as_deref(), Some("."));
        assert_eq!(target("git add -f -A").as_deref(), Some("-A"));
    }

    #[test]
    fn blocks_with_trailing_words() {
        assert_eq!(target("git add . && git commit -m wip").as_deref(), Some("."));
    }

    #[test]
    fn blocks_inside_compound() {
        assert_eq!(target("cd repo && git add -A").as_deref(), Some("-A"));
    }

    #[test]
    fn extra_whitespace() {
        assert_eq!(target("git   add\t.").as_deref(), Some("."));
    }

    #[test]
    fn allows_dot_prefixed_path() {
        assert_eq!(target("git add ./file.txt"), None);
    }

    #[test]
    fn allows_all_suffix() {
        assert_eq!(target("git add file.all"), None);
    }

    #[test]
    fn allows_specific_files() {
        assert_eq!(target("git add src/app.py utils.py"), None);
    }

    #[test]
    fn allows_flag_prefix() {
        assert_eq!(target("git add -Ab"), None);
        assert_eq!(target("git add --allx"), None);
    }

    #[test]
    fn allows_other_git_commands() {
        assert_eq!(target("git diff --stat"), None);
        assert_eq!(target("git status ."), None);
    }

    #[test]
    fn whole_command_scope() {
        assert_eq!(BlanketStagingRule::new().scope(), Scope::WholeCommand);
    }
}
