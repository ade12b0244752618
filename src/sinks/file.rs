//! File sink helper

use crate::core::Result;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Open `path` for appending, creating the file and any missing parent
/// directories. On unix the file is created with mode `0o644`.
///
/// The returned handle is ready to pass to [`Logger::new`] as the
/// persistent sink.
///
/// [`Logger::new`]: crate::Logger::new
pub fn open_log_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    Ok(options.open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/app.log");

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"first\n").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");
    }

    #[test]
    fn test_appends_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");

        open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        let file = open_log_file(&path).unwrap();

        // Owner read/write, never executable; group/other bits depend on the
        // process umask.
        let mode = file.metadata().unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o600);
        assert_eq!(mode & 0o111, 0);
    }
}
