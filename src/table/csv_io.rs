//! CSV ingestion and result serialization
//!
//! Input: header-first CSV; empty header names are skipped, empty cells
//! dropped. Output: every derived table occupies two CSV fields per row
//! (`term, count`); the first row interleaves `(column name, cell count)`
//! and `(hypernym column name, empty)` pairs, and shorter tables are
//! padded with empty pairs.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use super::model::{Column, Profile, Table};
use crate::error::Result;

/// Read a CSV file into a table.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let file = File::open(path.as_ref())?;
    read_table_from(file)
}

/// Read CSV data from any reader into a table.
///
/// Rows shorter or longer than the header are tolerated; fields beyond
/// the header are ignored. Duplicate header names merge into the first
/// occurrence.
pub fn read_table_from<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut columns: Vec<Column> = Vec::new();
    // Maps header position to output column, None for skipped headers.
    let mut slots: Vec<Option<usize>> = Vec::with_capacity(headers.len());
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    for name in headers.iter() {
        if name.is_empty() {
            slots.push(None);
            continue;
        }
        let slot = match seen.get(name) {
            Some(&slot) => slot,
            None => {
                let slot = columns.len();
                columns.push(Column::new(name, Vec::new()));
                seen.insert(name.to_string(), slot);
                slot
            }
        };
        slots.push(Some(slot));
    }

    for record in csv_reader.records() {
        let record = record?;
        for (idx, value) in record.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            if let Some(&Some(slot)) = slots.get(idx) {
                columns[slot].cells.push(value.to_string());
            }
        }
    }

    Ok(Table::from_columns(columns))
}

/// Write a profile to a CSV file.
pub fn write_profile(path: impl AsRef<Path>, profile: &Profile) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_profile_to(file, profile)
}

/// Write a profile to any writer.
pub fn write_profile_to<W: Write>(writer: W, profile: &Profile) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if profile.columns.is_empty() {
        csv_writer.flush()?;
        return Ok(());
    }

    let mut header: Vec<String> = Vec::new();
    for column in &profile.columns {
        header.push(column.name.clone());
        header.push(column.cell_count.to_string());
        if column.hypernyms.is_some() {
            header.push(column.hypernym_name());
            header.push(String::new());
        }
    }
    csv_writer.write_record(&header)?;

    let mut tables: Vec<&[(String, u32)]> = Vec::new();
    for column in &profile.columns {
        tables.push(&column.frequencies);
        if let Some(hypernyms) = &column.hypernyms {
            tables.push(hypernyms);
        }
    }

    let depth = tables.iter().map(|table| table.len()).max().unwrap_or(0);
    for row in 0..depth {
        let mut record: Vec<String> = Vec::with_capacity(tables.len() * 2);
        for table in &tables {
            match table.get(row) {
                Some((term, count)) => {
                    record.push(term.clone());
                    record.push(count.to_string());
                }
                None => {
                    record.push(String::new());
                    record.push(String::new());
                }
            }
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
