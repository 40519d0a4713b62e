//! Build a small table, write it to disk, read it back, and print it.
//!
//! ```sh
//! cargo run --example roster
//! ```

use csvgrid::CsvFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("csvgrid-roster.csv");

    let mut roster = CsvFile::with_size(3, 2, 1)?;
    roster.set_path(&path);
    roster.set_comment(0, "generated roster");
    roster.set_cell(0, 0, "ada");
    roster.set_cell(0, 1, "engineering");
    roster.set_cell(1, 0, "grace");
    roster.set_cell(1, 1, "compilers");
    roster.set_cell(2, 0, "edsger");
    roster.write()?;

    let mut back = CsvFile::new(&path);
    let shape = back.assess(true)?;
    println!(
        "{}: {} rows x {} columns, {} comments, longest line {} bytes",
        path.display(),
        shape.rows,
        shape.columns,
        shape.comments,
        shape.max_line_len
    );

    back.read(false)?;
    for index in 0..back.comment_count() {
        match back.comment(index) {
            Some(text) => println!("# {text}"),
            None => println!("#"),
        }
    }
    for row in 0..back.row_count() {
        for column in 0..back.column_count() {
            match back.cell(row, column) {
                Some(text) => print!("[{text}] "),
                None => print!("[] "),
            }
        }
        println!();
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
