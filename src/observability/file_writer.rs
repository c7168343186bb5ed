//! Rotating line writer for the trace file.
//!
//! Lines are appended to one file. Before a write, if the file has grown past
//! the size limit it is renamed to `<file>.<UTC timestamp>-<seq>` and a fresh file
//! is started; only the newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size that triggers rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating writer. The file is opened lazily on first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotation, opening, or writing, and an
    /// error if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            let opened = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *guard = Some(opened);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string();
        self.rotate_with_stamp(&stamp)
    }

    /// Renames the current file to `<file>.<stamp>-<seq>`, where `seq` is one
    /// past the highest sequence already used for `stamp`.
    fn rotate_with_stamp(&self, stamp: &str) -> io::Result<()> {
        let seq = self
            .backups()?
            .iter()
            .filter_map(|path| self.backup_suffix(path))
            .filter_map(|suffix| {
                suffix
                    .strip_prefix(stamp)?
                    .strip_prefix('-')?
                    .parse::<u32>()
                    .ok()
            })
            .max()
            .map_or(0, |n| n + 1);

        let backup = self.backup_path(&format!("{stamp}-{seq:06}"));
        fs::rename(&self.file_path, &backup)?;
        tracing::trace!(backup = %backup.display(), "rotated trace file");
        self.prune_backups()
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    fn backup_prefix(&self) -> Option<String> {
        self.file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}."))
    }

    fn backup_suffix(&self, path: &Path) -> Option<String> {
        let prefix = self.backup_prefix()?;
        path.file_name()?
            .to_str()?
            .strip_prefix(&prefix)
            .map(String::from)
    }

    /// Backup files of this writer, newest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        if self.backup_prefix().is_none() {
            return Ok(Vec::new());
        }

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| self.backup_suffix(path).is_some())
            .collect();

        // `<stamp>-<zero-padded seq>` sorts chronologically as a string.
        backups.sort_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        for old in self.backups()?.iter().skip(self.max_backups) {
            if let Err(e) = fs::remove_file(old) {
                tracing::trace!(path = %old.display(), error = %e, "failed to remove old trace backup");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biztone-otlp.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn rotates_past_limit_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biztone-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        // Every write after the first finds an oversized file.
        assert_eq!(fs::read_to_string(&path).unwrap(), "line-5\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        let newest: Vec<String> = backups
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert_eq!(newest, ["line-4\n", "line-3\n"]);
    }

    #[test]
    fn same_millisecond_rotations_keep_the_newest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biztone-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 0, 3);

        for i in 0..12 {
            fs::write(&path, format!("gen-{i}")).unwrap();
            writer.rotate_with_stamp("20240101T000000.000Z").unwrap();
        }

        let kept: Vec<String> = writer
            .backups()
            .unwrap()
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert_eq!(kept, ["gen-11", "gen-10", "gen-9"]);
        assert!(path
            .with_file_name("biztone-otlp.json.20240101T000000.000Z-000011")
            .exists());
    }

    #[test]
    fn ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biztone-otlp.json");
        fs::write(dir.path().join("other.json.20240101T000000.000Z"), "x").unwrap();
        fs::write(dir.path().join("biztone-otlp.jsonl"), "x").unwrap();

        let writer = FileWriter::with_limits(path, 0, 0);
        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();

        assert!(writer.backups().unwrap().is_empty());
        assert!(dir.path().join("other.json.20240101T000000.000Z").exists());
        assert!(dir.path().join("biztone-otlp.jsonl").exists());
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("missing").join("trace.json"));
        assert!(writer.write_line("x").is_err());
    }
}
