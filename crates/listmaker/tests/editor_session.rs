//! End-to-end editing sessions: load, edit through the controller, save, reload

use listmaker::background::spawn_load;
use listmaker::prelude::*;
use listmaker::{GridSnapshot, ViewMirror};
use pretty_assertions::assert_eq;

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn edit_and_save_session() {
    let dir = tempfile::tempdir().unwrap();
    let source = write(&dir, "groceries.csv", "item,qty\napples,4\npears,3\n");

    let mut editor = Editor::new();
    let mirror = ViewMirror::default();
    editor.controller_mut().subscribe(mirror.clone());
    editor.controller_mut().subscribe(LoggingObserver);
    editor.on_load_requested(&source).unwrap();

    let controller = editor.controller_mut();
    controller.insert_row(2).unwrap();
    controller.set_cell(2, 0, "figs").unwrap();
    controller.insert_column(1).unwrap();
    controller.rename_column_label(1, "aisle").unwrap();
    controller.set_cell(0, 1, "fruit").unwrap();
    controller.clear_cell(1, 2).unwrap();

    assert_eq!(mirror.snapshot(), GridSnapshot::of(editor.table()));

    let target = dir.path().join("groceries-edited.csv");
    editor.on_save_requested(&target).unwrap();
    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "item,aisle,qty\napples,fruit,4\npears,,\nfigs,,\n"
    );
    assert_eq!(editor.path(), Some(target.as_path()));

    let mut reopened = Editor::new();
    reopened.on_load_requested(&target).unwrap();
    assert_eq!(reopened.table(), editor.table());
}

#[test]
fn rejected_edits_leave_the_document_alone() {
    let dir = tempfile::tempdir().unwrap();
    let source = write(&dir, "list.csv", "A\nx\n");

    let mut editor = Editor::new();
    editor.on_load_requested(&source).unwrap();
    let before = editor.table().clone();

    let log = ChangeLog::new();
    let controller = editor.controller_mut();
    controller.subscribe(log.clone());

    assert_eq!(
        controller.remove_row(1),
        Err(Error::RowOutOfBounds {
            position: 1,
            len: 1
        })
    );
    assert_eq!(
        controller.insert_column(3),
        Err(Error::ColumnOutOfBounds {
            position: 3,
            len: 1
        })
    );
    assert!(controller.set_cell(0, 1, "y").is_err());
    assert!(controller.rename_row_label(4, "z").is_err());

    assert!(log.is_empty());
    assert_eq!(editor.table(), &before);
}

#[test]
fn print_after_edits() {
    let mut editor = Editor::with_table(
        CsvReader::read_str("item,qty\npears,3\n", &CsvReadOptions::default()).unwrap(),
    );
    editor.controller_mut().insert_row(0).unwrap();
    editor.controller_mut().rename_row_label(0, "new").unwrap();

    assert_eq!(
        editor.on_print_requested(),
        "     item   qty\nnew\n0    pears  3"
    );
}

#[test]
fn background_load_applies_as_reset() {
    let dir = tempfile::tempdir().unwrap();
    let source = write(&dir, "big.csv", "A,B\n1,2\n3,4\n5,6\n");

    let mut editor = Editor::new();
    let log = ChangeLog::new();
    editor.controller_mut().subscribe(log.clone());

    let outcome = spawn_load(&source, CsvReadOptions::for_path(&source))
        .recv()
        .unwrap();
    editor.apply_loaded(outcome).unwrap();

    let reset = ChangeEvent::Reset {
        rows: 3,
        columns: 2,
    };
    assert_eq!(log.take(), vec![(Phase::Begin, reset), (Phase::End, reset)]);
    assert_eq!(editor.table().row_count(), 3);
    assert_eq!(editor.path(), Some(source.as_path()));
}

#[test]
fn background_load_failure_keeps_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = Editor::with_table(Table::with_columns(["kept"]));

    let outcome = spawn_load(dir.path().join("absent.csv"), CsvReadOptions::default())
        .recv()
        .unwrap();

    assert!(matches!(editor.apply_loaded(outcome), Err(EditorError::Csv(_))));
    assert_eq!(editor.table().column_labels(), &["kept"]);
}
