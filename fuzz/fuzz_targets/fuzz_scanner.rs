#![no_main]

use arbitrary::Arbitrary;
use csvgrid::{Format, Table, scanner, write_table};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    separator: u8,
    comment: u8,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let format = Format {
        separator: input.separator,
        comment: input.comment,
        ..Format::default()
    };

    // Measure, size, extract: total for arbitrary bytes and characters.
    let shape = scanner::measure(&input.bytes, &format);
    let mut table = Table::with_size(shape.rows, shape.columns, shape.comments)
        .expect("reserving measured dimensions");
    scanner::extract(&input.bytes, &format, &mut table);

    assert_eq!(table.row_count(), shape.rows);
    assert_eq!(table.column_count(), shape.columns);
    assert_eq!(table.comment_count(), shape.comments);
    assert!(table.allocated_rows() >= table.row_count());
    assert!(table.allocated_columns() >= table.column_count());

    // Every logical slot is addressable, and serialization of whatever was
    // extracted never fails into a Vec sink.
    for r in 0..table.row_count() {
        for c in 0..table.column_count() {
            let _ = table.cell(r, c);
        }
    }
    let mut out = Vec::new();
    write_table(&mut out, &table, &format).expect("writing to a Vec");
});
