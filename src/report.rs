//! Accumulation and rendering of the report grid.
//!
//! The report keeps decoded frames and annotation descriptions as rows and
//! only turns them into text cells when rendered, so the decoder stays free
//! of presentation concerns.

use std::fmt;

use crate::frame::Frame;

/// Fixed labels of the report header. Rows with more than four arguments
/// extend the grid past these, the extra columns get a blank label.
const HEADER: [&str; 7] = ["action", "cmd", "argc", "arg0", "arg1", "arg2", "arg3"];

/// One line of the report body.
#[derive(Debug)]
enum Row {
    /// Opens an annotation group: the description with all command cells blank.
    Annotation(String),
    /// One decoded frame within the current group.
    Frame(Frame),
}

impl Row {
    fn cells(&self) -> Vec<String> {
        match self {
            Row::Annotation(description) => vec![description.clone()],
            Row::Frame(frame) => {
                let mut cells = vec![
                    String::new(),
                    format!("{:04x}", frame.command()),
                    frame.argc().to_string(),
                ];
                cells.extend(frame.args().iter().map(|arg| format!("{:02x}", arg)));
                cells
            }
        }
    }
}

/// The report table, in insertion order.
#[derive(Debug, Default)]
pub struct Report {
    rows: Vec<Row>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new annotation group. An annotation whose timestamp matches no
    /// frames still gets its group header in the output.
    pub fn push_annotation(&mut self, description: &str) {
        self.rows.push(Row::Annotation(description.to_string()));
    }

    /// Appends a frame to the current group.
    pub fn push_frame(&mut self, frame: Frame) {
        self.rows.push(Row::Frame(frame));
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<String>> = self.rows.iter().map(Row::cells).collect();

        // Rows are ragged, the grid is as wide as the widest one.
        let columns = rows.iter().map(Vec::len).fold(HEADER.len(), usize::max);
        let mut widths = vec![0; columns];
        for (width, label) in widths.iter_mut().zip(HEADER.iter()) {
            *width = label.len();
        }
        for row in &rows {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(cell.len());
            }
        }

        write_cells(f, &HEADER.map(String::from), &widths)?;
        for &width in &widths {
            write!(f, "|{}", "-".repeat(width + 2))?;
        }
        writeln!(f, "|")?;
        for row in &rows {
            write_cells(f, row, &widths)?;
        }

        Ok(())
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    for (index, &width) in widths.iter().enumerate() {
        let cell = cells.get(index).map_or("", String::as_str);
        write!(f, "| {:<width$} ", cell)?;
    }
    writeln!(f, "|")
}
