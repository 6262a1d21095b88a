// src/store.rs
//
// The ledger: an xlsx workbook, first sheet, first row = headers.
//
// Appending is read-modify-write: load every row, add one, write the whole
// workbook back. Only one kiosk process may write a given ledger at a time;
// nothing here locks the file. The write goes through a scratch file and a
// rename, so a crash mid-write leaves the previous ledger intact.

use std::path::{Path, PathBuf};

use calamine::{Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::config::consts::LEDGER_HEADERS;
use crate::record::{LedgerRow, ProfileRecord};
use crate::{csv, file};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Could not read ledger {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Could not write ledger {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nothing to export")]
    Empty,
}

/// Whole-ledger table. Rows are padded to `headers.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            headers: LEDGER_HEADERS.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
        }
    }
}

impl Ledger {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Add `record` as the last row. Columns are matched by header name, so a
    /// file written with a different column order keeps that order; columns
    /// this record doesn't know stay empty.
    pub fn push_record(&mut self, record: &ProfileRecord) {
        let cells = record.cells();

        for (col, _) in &cells {
            if self.column(col).is_none() {
                self.headers.push(s!(*col));
                for r in &mut self.rows { r.push(s!()); }
            }
        }

        let mut row = vec![s!(); self.headers.len()];
        for (col, value) in cells {
            if let Some(ix) = self.column(col) {
                row[ix] = value;
            }
        }
        self.rows.push(row);
    }

    /// Typed view over every row, in file order.
    pub fn entries(&self) -> Vec<LedgerRow> {
        let ix: Vec<Option<usize>> = LEDGER_HEADERS.iter().map(|h| self.column(h)).collect();
        let cell = |row: &[String], i: Option<usize>| -> Option<String> {
            i.and_then(|i| row.get(i))
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(|v| s!(v))
        };

        self.rows
            .iter()
            .map(|row| LedgerRow {
                name: cell(row, ix[0]),
                identification: cell(row, ix[1]),
                email: cell(row, ix[2]),
                role: cell(row, ix[3]),
                registered_at: cell(row, ix[4]).unwrap_or_default(),
            })
            .collect()
    }
}

/// Read the whole ledger. A missing file is an empty ledger, not an error.
pub fn load_all(path: &Path) -> Result<Ledger, LedgerError> {
    if !path.exists() {
        logd!("Ledger: {} not found, starting empty", path.display());
        return Ok(Ledger::default());
    }

    let read_err = |message: String| LedgerError::Read { path: path.to_path_buf(), message };

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| read_err(e.to_string()))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r.map_err(|e| read_err(e.to_string()))?,
        None => return Err(read_err(s!("workbook has no sheets"))),
    };

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect::<Vec<String>>());

    let headers: Vec<String> = match rows.next() {
        Some(h) if h.iter().any(|c| !c.trim().is_empty()) => h,
        _ => return Ok(Ledger::default()),
    };

    let width = headers.len();
    let body: Vec<Vec<String>> = rows
        .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
        .map(|mut r| { r.resize(width, s!()); r })
        .collect();

    logd!("Ledger: Loaded {} rows from {}", body.len(), path.display());
    Ok(Ledger { headers, rows: body })
}

/// Replace the ledger file with `ledger`.
pub fn save(path: &Path, ledger: &Ledger) -> Result<(), LedgerError> {
    let write_err = |message: String| LedgerError::Write { path: path.to_path_buf(), message };

    file::write_replacing(path, |tmp| {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (c, h) in ledger.headers.iter().enumerate() {
            sheet.write_string(0, c as u16, h).map_err(|e| write_err(e.to_string()))?;
        }
        for (r, row) in ledger.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_empty() { continue; }
                sheet
                    .write_string(r as u32 + 1, c as u16, cell)
                    .map_err(|e| write_err(e.to_string()))?;
            }
        }

        workbook.save(tmp).map_err(|e| write_err(e.to_string()))
    })
}

/// Append one record. Returns the ledger's row count afterwards.
pub fn append(path: &Path, record: &ProfileRecord) -> Result<usize, LedgerError> {
    let mut ledger = load_all(path)?;
    ledger.push_record(record);
    save(path, &ledger)?;
    logf!("Ledger: Appended row {} → {}", ledger.len(), path.display());
    Ok(ledger.len())
}

/// Write the history download. Refuses an empty ledger.
pub fn export_csv(ledger: &Ledger, out: &Path) -> Result<PathBuf, LedgerError> {
    if ledger.is_empty() {
        return Err(LedgerError::Empty);
    }
    file::write_text(out, &csv::ledger_to_csv(ledger))?;
    logf!("Export: {} rows → {}", ledger.len(), out.display());
    Ok(out.to_path_buf())
}
