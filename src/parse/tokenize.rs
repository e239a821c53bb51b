/// Tokenize a command into words using shlex (POSIX word splitting).
///
/// Returns `None` when the command cannot be split (unbalanced quotes,
/// trailing escape). Callers treat that as "not applicable".
pub fn tokenize(command: &str) -> Option<Vec<String>> {
    shlex::split(command)
}

/// Final path segment of a slash-separated path.
///
/// Empty and `.` components are ignored, so `src/app.py/` → `app.py`,
/// `./x` → `x`, and `.` → `""`. Matching only ever sees this segment.
pub fn basename(path: &str) -> &str {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .next_back()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple() {
        assert_eq!(
            tokenize("git add -p src/app.py").unwrap(),
            vec!["git", "add", "-p", "src/app.py"]
        );
    }

    #[test]
    fn tokenize_quoted() {
        assert_eq!(
            tokenize("git add 'my file.txt'").unwrap(),
            vec!["git", "add", "my file.txt"]
        );
    }

    #[test]
    fn tokenize_double_quoted() {
        assert_eq!(
            tokenize("git add \"dir with space/a.log\"").unwrap(),
            vec!["git", "add", "dir with space/a.log"]
        );
    }

    #[test]
    fn tokenize_escaped_space() {
        assert_eq!(
            tokenize(r"git add my\ notes.tmp").unwrap(),
            vec!["git", "add", "my notes.tmp"]
        );
    }

    #[test]
    fn tokenize_unbalanced_quote() {
        assert!(tokenize("git add 'oops").is_none());
        assert!(tokenize("git add \"oops").is_none());
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn basename_plain() {
        assert_eq!(basename("app.log"), "app.log");
    }

    #[test]
    fn basename_nested() {
        assert_eq!(basename("a/b/secret.txt"), "secret.txt");
        assert_eq!(basename("/abs/path/server.key"), "server.key");
    }

    #[test]
    fn basename_trailing_slash() {
        assert_eq!(basename("logs/"), "logs");
    }

    #[test]
    fn basename_dot_components() {
        assert_eq!(basename("./x.tmp"), "x.tmp");
        assert_eq!(basename("dir/."), "dir");
        assert_eq!(basename("."), "");
        assert_eq!(basename("a/.."), "..");
    }
}
