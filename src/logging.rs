use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Open the log file for appending, creating it and its parent directory if
/// needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("life.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.log");
        fs::write(&path, "old\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "new").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_reports_unusable_path() {
        // A regular file cannot be used as the log directory.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        assert!(open_log_file(&blocker.join("life.log")).is_err());
    }
}
