//! Fixed-width contact table.
//!
//! Columns are the 1-based row number followed by the five contact fields,
//! left-aligned and padded to 4/20/20/15/40 characters; the birth date column is
//! unpadded. Values longer than their column are printed in full, which shifts
//! the rest of that row.

use crate::models::{Contact, CONTACT_HEADER};
use std::io::{self, Write};

/// Width of the `=` rules above and below the header and after the last row.
pub const RULE_WIDTH: usize = 125;

const NO_CONTACTS: &str = "No Contacts Found.";

/// Write `contacts` as a bordered table, or a notice when there are none.
pub fn render<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return writeln!(out, "{}", NO_CONTACTS);
    }

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    write_row(out, "No.", CONTACT_HEADER)?;
    writeln!(out, "{}", rule)?;

    for (index, contact) in contacts.iter().enumerate() {
        write_row(out, &(index + 1).to_string(), contact.fields())?;
        // Blank spacer between rows
        writeln!(out)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", rule)
}

fn write_row<W: Write>(
    out: &mut W,
    number: &str,
    [first, last, phone, email, birth]: [&str; 5],
) -> io::Result<()> {
    writeln!(
        out,
        "{:<4} {:<20} {:<20} {:<15} {:<40} {}",
        number, first, last, phone, email, birth
    )
}
