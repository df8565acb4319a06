//! Host application hooks around a single editing session

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use tracing::{info, warn};

use listmaker_core::{Table, TableController};
use listmaker_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

use crate::background::LoadOutcome;
use crate::dump;
use crate::error::{EditorError, EditorResult};

/// One open document: the controller a view drives, plus the load, save and
/// print entry points a host wires to its menus
///
/// A failed load leaves the current table (and its observers) untouched.
#[derive(Debug, Default)]
pub struct Editor {
    controller: TableController,
    path: Option<PathBuf>,
    read_options: Option<CsvReadOptions>,
    write_options: Option<CsvWriteOptions>,
}

impl Editor {
    /// Start a session on an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on an existing table
    pub fn with_table(table: Table) -> Self {
        Self {
            controller: TableController::with_table(table),
            ..Self::default()
        }
    }

    pub fn controller(&self) -> &TableController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TableController {
        &mut self.controller
    }

    pub fn table(&self) -> &Table {
        self.controller.table()
    }

    /// File most recently loaded from or saved to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Use fixed read options instead of deriving them from each file name
    pub fn set_read_options(&mut self, options: CsvReadOptions) {
        self.read_options = Some(options);
    }

    /// Use fixed write options instead of deriving them from each file name
    pub fn set_write_options(&mut self, options: CsvWriteOptions) {
        self.write_options = Some(options);
    }

    /// Load `path` and make it the current document
    pub fn on_load_requested<P: AsRef<Path>>(&mut self, path: P) -> EditorResult<()> {
        let path = path.as_ref();
        let options = self
            .read_options
            .clone()
            .unwrap_or_else(|| CsvReadOptions::for_path(path));

        let table = CsvReader::read_file(path, &options).map_err(|e| {
            warn!(path = %path.display(), error = %e, "load failed");
            e
        })?;
        self.controller.replace_table(table);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Hand over a table decoded by [`spawn_load`](crate::background::spawn_load)
    pub fn apply_loaded(&mut self, outcome: LoadOutcome) -> EditorResult<()> {
        let LoadOutcome { path, result } = outcome;
        let table = result.map_err(|e| {
            warn!(path = %path.display(), error = %e, "background load failed");
            e
        })?;
        info!(path = %path.display(), "applying background load");
        self.controller.replace_table(table);
        self.path = Some(path);
        Ok(())
    }

    /// Block until a background load finishes, then apply it
    pub fn finish_load(&mut self, pending: &Receiver<LoadOutcome>) -> EditorResult<()> {
        let outcome = pending.recv().map_err(|_| {
            warn!("background load worker exited without a result");
            EditorError::LoadAborted("worker exited without a result".to_string())
        })?;
        self.apply_loaded(outcome)
    }

    /// Write the current table to `path`
    pub fn on_save_requested<P: AsRef<Path>>(&mut self, path: P) -> EditorResult<()> {
        let path = path.as_ref();
        let options = self
            .write_options
            .clone()
            .unwrap_or_else(|| CsvWriteOptions::for_path(path));

        CsvWriter::write_file(self.controller.table(), path, &options).map_err(|e| {
            warn!(path = %path.display(), error = %e, "save failed");
            EditorError::from(e)
        })?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Plain-text dump of the current table
    pub fn on_print_requested(&self) -> String {
        dump::render(self.controller.table())
    }
}
