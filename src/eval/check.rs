/// The policy checks a hook entry can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// `git add .`, `-A`, `-a`, `--all`.
    GitAddAll,
    DebugArtifacts,
    LargeFiles,
    SensitiveFiles,
    MergeConflicts,
}

impl Check {
    pub const ALL: [Check; 5] = [
        Check::GitAddAll,
        Check::DebugArtifacts,
        Check::LargeFiles,
        Check::SensitiveFiles,
        Check::MergeConflicts,
    ];

    /// Command-line name of the check.
    pub fn name(self) -> &'static str {
        match self {
            Check::GitAddAll => "git-add-all",
            Check::DebugArtifacts => "debug-artifacts",
            Check::LargeFiles => "large-files",
            Check::SensitiveFiles => "sensitive-files",
            Check::MergeConflicts => "merge-conflicts",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
