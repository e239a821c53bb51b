use super::tokenize::tokenize;

/// A `git add` invocation with its file operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingInvocation {
    /// Tokens after `git add` that do not start with `-`, in command order.
    pub operands: Vec<String>,
}

/// Recognize a file-staging command.
///
/// Only `git add ...` as the first two words qualifies. Everything else,
/// including commands that fail to tokenize, yields `None`.
pub fn classify(command: &str) -> Option<StagingInvocation> {
    let Some(words) = tokenize(command) else {
        log::debug!("tokenization failed, not applicable");
        return None;
    };

    if words.len() < 2 || words[0] != "git" || words[1] != "add" {
        return None;
    }

    let operands = words[2..]
        .iter()
        .filter(|w| !w.starts_with('-'))
        .cloned()
        .collect();

    Some(StagingInvocation { operands })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands(cmd: &str) -> Vec<String> {
        classify(cmd).expect("should classify").operands
    }

    #[test]
    fn plain_add() {
        assert_eq!(operands("git add a.txt b.txt"), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn flags_excluded() {
        assert_eq!(
            operands("git add -p --verbose src/app.py -N notes.md"),
            vec!["src/app.py", "notes.md"]
        );
    }

    #[test]
    fn order_preserved() {
        assert_eq!(operands("git add z a m"), vec!["z", "a", "m"]);
    }

    #[test]
    fn quoted_operand_kept_whole() {
        assert_eq!(operands("git add 'tmp_ file.txt'"), vec!["tmp_ file.txt"]);
    }

    #[test]
    fn add_with_no_operands() {
        assert!(operands("git add").is_empty());
        assert!(operands("git add -A").is_empty());
    }

    #[test]
    fn not_git_add() {
        assert!(classify("git diff --stat").is_none());
        assert!(classify("git").is_none());
        assert!(classify("").is_none());
        assert!(classify("ls -la").is_none());
        assert!(classify("git commit -m add").is_none());
    }

    #[test]
    fn git_options_before_subcommand_not_recognized() {
        assert!(classify("git -C repo add a.txt").is_none());
    }

    #[test]
    fn unbalanced_quotes_not_applicable() {
        assert!(classify("git add 'a.log").is_none());
    }
}
