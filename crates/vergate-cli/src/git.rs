//! Git access for reading a manifest as it exists at another revision.

use std::path::Path;
use std::process::Command;

use crate::source::SourceError;

/// Read `file_name` (relative to `dir`) as committed at `rev`.
///
/// Runs `git show <rev>:./<file_name>` in `dir`, so the path is resolved
/// relative to `dir` rather than the repository root.
pub fn show_file_at(dir: &Path, rev: &str, file_name: &str) -> Result<String, SourceError> {
    if !is_git_repo(dir) {
        return Err(SourceError::Git(format!(
            "{} is not inside a git work tree",
            dir.display()
        )));
    }

    let object = format!("{rev}:./{file_name}");
    let output = Command::new("git")
        .args(["show", &object])
        .current_dir(dir)
        .output()
        .map_err(|e| SourceError::Git(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SourceError::Git(format!(
            "git show {object} failed: {}",
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|_| SourceError::Git(format!("git show {object} returned non-UTF-8 content")))
}

/// Check whether a directory is inside a git work tree.
pub fn is_git_repo(dir: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(dir)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
