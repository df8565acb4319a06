//! Loading a file off the editing thread
//!
//! The model itself is single-threaded. A host that must not block while a
//! large file is decoded runs the decode on a worker thread and hands the
//! finished [`Table`] back through a channel:
//!
//! ```rust,no_run
//! use listmaker::background::spawn_load;
//! use listmaker::{CsvReadOptions, Editor};
//!
//! let mut editor = Editor::new();
//! let pending = spawn_load("big.csv", CsvReadOptions::for_path("big.csv"));
//! // ... keep serving the UI, polling with `pending.try_recv()`, or block:
//! editor.finish_load(&pending).unwrap();
//! ```

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use tracing::debug;

use listmaker_core::Table;
use listmaker_csv::{CsvReadOptions, CsvReader, CsvResult};

/// Result of a background load
#[derive(Debug)]
pub struct LoadOutcome {
    /// File that was read
    pub path: PathBuf,
    /// Decoded table, or why decoding failed
    pub result: CsvResult<Table>,
}

/// Decode `path` on a new thread; the outcome arrives on the returned receiver
pub fn spawn_load<P: Into<PathBuf>>(path: P, options: CsvReadOptions) -> Receiver<LoadOutcome> {
    let path = path.into();
    let (tx, rx) = mpsc::channel();
    debug!(path = %path.display(), "spawning background load");
    thread::spawn(move || {
        let result = CsvReader::read_file(&path, &options);
        let _ = tx.send(LoadOutcome { path, result });
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_spawn_load_delivers_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"A,B\n1,2\n").unwrap();

        let outcome = spawn_load(file.path(), CsvReadOptions::default())
            .recv()
            .unwrap();

        assert_eq!(outcome.path, file.path());
        let table = outcome.result.unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_labels(), &["A", "B"]);
    }

    #[test]
    fn test_spawn_load_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = spawn_load(dir.path().join("nope.csv"), CsvReadOptions::default())
            .recv()
            .unwrap();
        assert!(outcome.result.is_err());
    }
}
