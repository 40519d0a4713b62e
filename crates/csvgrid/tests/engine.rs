use std::fs;

use csvgrid::{CsvFile, Error};
use tempfile::tempdir;

#[test]
fn writes_the_documented_byte_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut csv = CsvFile::with_size(2, 2, 1).unwrap();
    csv.set_comment(0, "hdr");
    csv.set_cell(0, 0, "x");
    csv.set_cell(1, 1, "y");
    csv.set_path(&path);
    csv.write().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"#hdr\r\nx;\r\n;y\r\n");
}

#[test]
fn write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round.csv");

    let mut csv = CsvFile::with_size(3, 3, 2).unwrap();
    csv.set_path(&path);
    csv.set_comment(0, "generated");
    csv.set_cell(0, 0, "name");
    csv.set_cell(0, 1, "qty");
    csv.set_cell(1, 0, "bolt");
    csv.set_cell(1, 1, "12");
    csv.set_cell(2, 2, "spare");
    csv.write().unwrap();

    let mut back = CsvFile::new(&path);
    back.read(false).unwrap();
    assert_eq!(back.row_count(), 3);
    assert_eq!(back.column_count(), 3);
    assert_eq!(back.comment_count(), 2);
    assert_eq!(back.comment(0).unwrap(), "generated");
    assert_eq!(back.comment(1), None);
    assert_eq!(back.cell(0, 0).unwrap(), "name");
    assert_eq!(back.cell(0, 1).unwrap(), "qty");
    assert_eq!(back.cell(1, 1).unwrap(), "12");
    assert_eq!(back.cell(2, 2).unwrap(), "spare");
    assert_eq!(back.cell(0, 2), None);
    assert_eq!(back.cell(2, 0), None);
}

#[test]
fn round_trips_with_a_reconfigured_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.csv");

    let mut csv = CsvFile::with_size(2, 2, 1).unwrap();
    csv.set_path(&path);
    csv.set_separator(b',');
    csv.set_comment_marker(b'%');
    csv.set_end_of_line("\n");
    csv.set_comment(0, "note");
    csv.set_cell(0, 0, "a");
    csv.set_cell(1, 1, "b");
    csv.write().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"%note\na,\n,b\n");

    let mut back = CsvFile::new(&path);
    back.set_separator(b',');
    back.set_comment_marker(b'%');
    back.read(false).unwrap();
    assert_eq!(back.row_count(), 2);
    assert_eq!(back.column_count(), 2);
    assert_eq!(back.comment(0).unwrap(), "note");
    assert_eq!(back.cell(0, 0).unwrap(), "a");
    assert_eq!(back.cell(1, 1).unwrap(), "b");
}

#[test]
fn setters_sanitize_against_the_current_format() {
    let mut csv = CsvFile::with_size(1, 1, 1).unwrap();
    csv.set_cell(0, 0, "Bad ; , Cell \r\n \n");
    assert_eq!(csv.cell(0, 0).unwrap(), "Bad : , Cell :: :");

    csv.set_comment(0, "a#b\tc");
    assert_eq!(csv.comment(0).unwrap(), "a:b\tc");
}

#[test]
fn out_of_range_access_never_errors() {
    let mut csv = CsvFile::with_size(1, 1, 1).unwrap();
    csv.set_cell(5, 5, "x");
    csv.set_comment(5, "x");
    assert_eq!(csv.cell(5, 5), None);
    assert_eq!(csv.comment(5), None);
    assert_eq!(csv.cell(usize::MAX, 0), None);
}

#[test]
fn read_of_a_missing_file_is_io_error_and_leaves_the_table() {
    let dir = tempdir().unwrap();
    let mut csv = CsvFile::with_size(1, 1, 0).unwrap();
    csv.set_cell(0, 0, "kept");
    csv.set_path(dir.path().join("absent.csv"));

    match csv.read(false) {
        Err(Error::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(csv.cell(0, 0).unwrap(), "kept");
    assert_eq!(csv.row_count(), 1);
}

#[test]
fn paths_are_required_for_io() {
    let mut csv = CsvFile::with_size(1, 1, 0).unwrap();
    match csv.write() {
        Err(Error::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
    match csv.read(false) {
        Err(Error::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn assess_previews_without_mutating() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("peek.csv");
    fs::write(&path, "#one\r\n#two\r\na;b;c\r\nd\r\n").unwrap();

    let mut csv = CsvFile::new(&path);
    let shape = csv.assess(false).unwrap();
    assert_eq!(shape.rows, 2);
    assert_eq!(shape.columns, 3);
    assert_eq!(shape.comments, 2);
    // "\na;b;c" up to its closing '\r' is the longest terminator gap.
    assert_eq!(shape.max_line_len, 6);

    assert_eq!(csv.row_count(), 0);
    assert_eq!(csv.column_count(), 0);
    assert_eq!(csv.comment_count(), 0);
}

#[test]
fn kept_buffer_is_reused_until_released() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache.csv");
    fs::write(&path, "a;b\r\n").unwrap();

    let mut csv = CsvFile::new(&path);
    csv.read(true).unwrap();
    fs::remove_file(&path).unwrap();

    // The cached bytes satisfy this read; the release happens afterwards.
    csv.read(false).unwrap();
    assert_eq!(csv.cell(0, 0).unwrap(), "a");

    // Cache gone, file gone.
    match csv.read(false) {
        Err(Error::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn read_replaces_previous_contents_completely() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shrink.csv");
    fs::write(&path, "z\r\n").unwrap();

    let mut csv = CsvFile::with_size(4, 4, 2).unwrap();
    csv.set_cell(3, 3, "stale");
    csv.set_comment(1, "stale");
    csv.set_path(&path);
    csv.read(false).unwrap();

    assert_eq!(csv.row_count(), 1);
    assert_eq!(csv.column_count(), 1);
    assert_eq!(csv.comment_count(), 0);
    assert_eq!(csv.cell(0, 0).unwrap(), "z");
    assert_eq!(csv.cell(3, 3), None);
    assert_eq!(csv.comment(1), None);
}

#[test]
fn comments_only_file_round_trips_comment_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("comments.csv");

    let mut csv = CsvFile::with_size(0, 0, 2).unwrap();
    csv.set_path(&path);
    csv.set_comment(0, "first");
    csv.write().unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"#first\r\n#\r\n");

    let mut back = CsvFile::new(&path);
    back.read(false).unwrap();
    assert_eq!(back.row_count(), 0);
    assert_eq!(back.comment_count(), 2);
    assert_eq!(back.comment(0).unwrap(), "first");
    assert_eq!(back.comment(1), None);
    // Every terminated line is a width candidate, so even a comment-only
    // file measures one column wide.
    assert_eq!(back.column_count(), 1);
}

#[test]
fn empty_file_reads_as_zero_counts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let mut csv = CsvFile::new(&path);
    csv.read(false).unwrap();
    assert_eq!(csv.row_count(), 0);
    assert_eq!(csv.column_count(), 0);
    assert_eq!(csv.comment_count(), 0);
}

#[test]
fn overwrite_truncates_the_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trunc.csv");

    let mut big = CsvFile::with_size(3, 3, 0).unwrap();
    big.set_path(&path);
    big.set_cell(0, 0, "long-enough-content");
    big.write().unwrap();

    let mut small = CsvFile::with_size(1, 1, 0).unwrap();
    small.set_path(&path);
    small.set_cell(0, 0, "s");
    small.write().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"s\r\n");
}
