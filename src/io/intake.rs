use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Inbox directory operators drop timesheet exports into.
pub const INBOX_DIR: &str = "to_parse";
/// Directory processed exports are moved to.
pub const ARCHIVE_DIR: &str = "parsed_files";

/// The pair of working directories timesheet exports move through.
///
/// Exports wait in the inbox until a run picks them up; once a run has merged
/// and saved the ledger they are moved to the archive so the operator can see
/// which files have been counted.
#[derive(Debug)]
pub struct Intake {
    inbox: PathBuf,
    archive: PathBuf,
}

impl Intake {
    /// Binds the intake directories under `base`, creating any that are
    /// missing.
    ///
    /// Returns the intake plus whether a bootstrap happened. After a bootstrap
    /// the inbox is necessarily empty, so the caller should stop and let the
    /// operator drop exports in before running again.
    pub fn open(base: &Path) -> io::Result<(Self, bool)> {
        let inbox = base.join(INBOX_DIR);
        let archive = base.join(ARCHIVE_DIR);

        let mut bootstrapped = false;
        for dir in [&inbox, &archive] {
            if !dir.is_dir() {
                fs::create_dir_all(dir)?;
                bootstrapped = true;
            }
        }

        Ok((Self { inbox, archive }, bootstrapped))
    }

    /// The `.csv` exports currently waiting in the inbox, sorted by file name
    /// so batches always apply in the same order.
    pub fn pending(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.inbox)? {
            let path = entry?.path();
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Moves processed exports out of the inbox into the archive.
    pub fn archive(&self, files: &[PathBuf]) -> io::Result<()> {
        for path in files {
            if let Some(name) = path.file_name() {
                fs::rename(path, self.archive.join(name))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_bootstraps_once() {
        let dir = tempdir().unwrap();

        let (_, bootstrapped) = Intake::open(dir.path()).unwrap();
        assert!(bootstrapped);
        assert!(dir.path().join(INBOX_DIR).is_dir());
        assert!(dir.path().join(ARCHIVE_DIR).is_dir());

        let (_, bootstrapped) = Intake::open(dir.path()).unwrap();
        assert!(!bootstrapped);
    }

    #[test]
    fn pending_lists_only_csv_files_sorted() {
        let dir = tempdir().unwrap();
        let (intake, _) = Intake::open(dir.path()).unwrap();

        let inbox = dir.path().join(INBOX_DIR);
        fs::write(inbox.join("b_store.csv"), "data").unwrap();
        fs::write(inbox.join("a_store.CSV"), "data").unwrap();
        fs::write(inbox.join("notes.txt"), "ignore me").unwrap();

        let pending = intake.pending().unwrap();
        let names: Vec<_> = pending
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_store.CSV", "b_store.csv"]);
    }

    #[test]
    fn archive_moves_files_out_of_the_inbox() {
        let dir = tempdir().unwrap();
        let (intake, _) = Intake::open(dir.path()).unwrap();

        let inbox = dir.path().join(INBOX_DIR);
        fs::write(inbox.join("march.csv"), "data").unwrap();

        let pending = intake.pending().unwrap();
        intake.archive(&pending).unwrap();

        assert!(intake.pending().unwrap().is_empty());
        assert!(dir.path().join(ARCHIVE_DIR).join("march.csv").is_file());
    }
}
