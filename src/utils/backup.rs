//! Package-state snapshots taken before mutating operations.

use crate::error::{PacwiseError, Result};
use crate::utils::process::{CommandRunner, CommandSpec};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the explicit package list (`pacman -Qq`) to
/// `<dir>/packages_<YYYYmmdd_HHMMSS>.txt` and return the file path.
pub fn snapshot_installed(runner: &dyn CommandRunner, dir: &Path) -> Result<PathBuf> {
    let spec = CommandSpec::new("pacman").arg("-Qq");
    let output = runner.capture(&spec)?;
    if !output.success() {
        return Err(PacwiseError::SystemCommandFailed {
            command: spec.display(),
            reason: output.stderr.trim().to_string(),
        });
    }

    fs::create_dir_all(dir).map_err(|e| PacwiseError::IoError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let file = dir.join(format!(
        "packages_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    fs::write(&file, output.stdout).map_err(|e| PacwiseError::IoError {
        path: file.clone(),
        source: e,
    })?;

    tracing::info!(path = %file.display(), "package state backed up");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::process::mock::MockRunner;

    #[test]
    fn snapshot_writes_package_list() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let runner = MockRunner::new().on_capture("pacman -Qq", 0, "bash\nvlc\n");

        let path = snapshot_installed(&runner, &tmp.path().join("backups")).expect("snapshot");

        assert!(path.file_name().unwrap().to_string_lossy().starts_with("packages_"));
        assert_eq!(fs::read_to_string(path).unwrap(), "bash\nvlc\n");
    }

    #[test]
    fn snapshot_fails_when_query_fails() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let runner = MockRunner::new();

        assert!(snapshot_installed(&runner, tmp.path()).is_err());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
