use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::eval::{Finding, Scope, StagingContext, Violation};
use crate::rules::StagingRule;

/// Line prefixes a merge tool writes around unresolved hunks.
pub const CONFLICT_MARKERS: [&str; 3] = ["<<<<<<<", "=======", ">>>>>>>"];

/// Refuses the whole command when any operand has unresolved conflicts.
///
/// Staging clean files next to a conflicted one would commit a broken tree,
/// so this rule does not filter: one conflicted file refuses everything.
#[derive(Debug, Default)]
pub struct ConflictMarkerRule;

impl StagingRule for ConflictMarkerRule {
    fn scope(&self) -> Scope {
        Scope::WholeCommand
    }

    fn header(&self) -> &str {
        "Merge conflict markers detected — resolve all conflicts before committing:"
    }

    fn remediation(&self) -> &str {
        "Do not stage any files until all conflicts above are resolved."
    }

    fn inspect(&self, ctx: &StagingContext) -> Vec<Violation> {
        ctx.operands()
            .iter()
            .filter(|op| has_conflict_markers(Path::new(op.as_str())))
            .map(|op| Violation::new(op.as_str(), Finding::ConflictMarker))
            .collect()
    }
}

/// Whether `path` is a regular file with a line starting with a conflict marker.
///
/// Lines are compared as bytes, so non-UTF-8 content never aborts the scan.
/// `\n`, `\r\n` and a bare `\r` all end a line. Missing, non-regular, or
/// unreadable files report `false`. Stops at the first marker line.
pub fn has_conflict_markers(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("skipping {}: {e}", path.display());
            return false;
        }
    };

    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => return false,
            Ok(_) => {
                if line.split(|&b| b == b'\r').any(starts_with_marker) {
                    return true;
                }
            }
            Err(e) => {
                log::debug!("read error in {}: {e}", path.display());
                return false;
            }
        }
    }
}

fn starts_with_marker(line: &[u8]) -> bool {
    CONFLICT_MARKERS
        .iter()
        .any(|m| line.starts_with(m.as_bytes()))
}
