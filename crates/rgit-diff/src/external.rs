//! Thin wrappers around the two external text-merge collaborators this
//! crate delegates to: the system `diff` (unified, per-blob) and `diff3`
//! (three-way, conflict-marker-producing) utilities. Neither diffing nor
//! merging algorithms are reimplemented here — rgit only shells out and
//! returns the collaborator's stdout verbatim.

use std::io::Write as _;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::DiffError;

fn write_temp(content: &[u8]) -> Result<NamedTempFile, DiffError> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}

/// Run `diff --unified --show-c-function --label a/<path> --label b/<path>
/// <from> <to>` over two blob contents and return its stdout verbatim.
///
/// `diff` exits 1 when the inputs differ (not an error condition) and 2 on
/// a real failure; only a spawn failure is treated as a [`DiffError`] here,
/// matching the source's `subprocess.Popen(...).communicate()` which never
/// inspects the exit code either.
pub fn run_diff(from: &[u8], to: &[u8], path: &str) -> Result<Vec<u8>, DiffError> {
    let from_file = write_temp(from)?;
    let to_file = write_temp(to)?;

    let output = Command::new("diff")
        .arg("--unified")
        .arg("--show-c-function")
        .arg("--label")
        .arg(format!("a/{path}"))
        .arg(from_file.path())
        .arg("--label")
        .arg(format!("b/{path}"))
        .arg(to_file.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| DiffError::Spawn { program: "diff", source })?;

    Ok(output.stdout)
}

/// Run `diff3 -m -L HEAD -L BASE -L MERGE_HEAD <head> <base> <other>` over
/// three blob contents and return the merged bytes (conflict markers and
/// all) verbatim.
pub fn run_diff3(head: &[u8], base: &[u8], other: &[u8]) -> Result<Vec<u8>, DiffError> {
    let head_file = write_temp(head)?;
    let base_file = write_temp(base)?;
    let other_file = write_temp(other)?;

    let output = Command::new("diff3")
        .arg("-m")
        .arg("-L")
        .arg("HEAD")
        .arg(head_file.path())
        .arg("-L")
        .arg("BASE")
        .arg(base_file.path())
        .arg("-L")
        .arg("MERGE_HEAD")
        .arg(other_file.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| DiffError::Spawn { program: "diff3", source })?;

    Ok(output.stdout)
}
