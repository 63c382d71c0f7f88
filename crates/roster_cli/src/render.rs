//! Plain-text table rendering for the employee list.

use roster_core::{Employee, EmployeeId, InputFields};
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["ID", "Name", "Age", "Occupation"];

/// Writes rows as an aligned table; the selected row is marked with `*`.
pub fn write_table<W: Write>(
    out: &mut W,
    rows: &[Employee],
    selection: Option<EmployeeId>,
) -> io::Result<()> {
    let cells: Vec<[String; 4]> = rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(out, ' ', &HEADERS.map(str::to_string), &widths)?;
    let rule = widths.map(|width| "-".repeat(width));
    write_line(out, ' ', &rule, &widths)?;
    for (row, employee) in cells.iter().zip(rows) {
        let marker = if selection == Some(employee.id) { '*' } else { ' ' };
        write_line(out, marker, row, &widths)?;
    }
    if rows.is_empty() {
        writeln!(out, "  (no employees)")?;
    }
    Ok(())
}

/// Writes the input field group and selection.
pub fn write_fields<W: Write>(
    out: &mut W,
    fields: &InputFields,
    selection: Option<EmployeeId>,
) -> io::Result<()> {
    writeln!(out, "Name:       {}", fields.name)?;
    writeln!(out, "Age:        {}", fields.age)?;
    writeln!(out, "Occupation: {}", fields.occupation)?;
    match selection {
        Some(id) => writeln!(out, "Selected:   {id}"),
        None => writeln!(out, "Selected:   (none)"),
    }
}

fn row_cells(employee: &Employee) -> [String; 4] {
    [
        employee.id.to_string(),
        employee.name.clone(),
        employee.age.map(|age| age.to_string()).unwrap_or_default(),
        employee.occupation.clone().unwrap_or_default(),
    ]
}

fn write_line<W: Write>(
    out: &mut W,
    marker: char,
    cells: &[String; 4],
    widths: &[usize; 4],
) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "{marker} {}", line.trim_end())
}
