use crate::prelude::*;
use csv::StringRecord;
use geocsv_core::util::normalize::normalize_address;
use std::path::{Path, PathBuf};

/// The complete input table with a validated address column.
#[derive(Debug, Clone)]
pub struct AddressTable {
    headers: StringRecord,
    address_idx: usize,
    rows: Vec<StringRecord>,
}

impl AddressTable {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(|row| row.get(self.address_idx).unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the spaces of all addresses by `+`.
    pub fn normalize(&mut self) {
        let idx = self.address_idx;
        for row in &mut self.rows {
            *row = row
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    if i == idx {
                        normalize_address(field)
                    } else {
                        field.to_owned()
                    }
                })
                .collect();
        }
    }

    /// Writes the table to `path`, replacing any existing file.
    pub fn store(&self, path: &Path) -> Result<()> {
        let write_err = |source| Error::Write {
            path: path.to_owned(),
            source,
        };
        let mut wtr = csv::Writer::from_path(path).map_err(write_err)?;
        wtr.write_record(&self.headers).map_err(write_err)?;
        for row in &self.rows {
            wtr.write_record(row).map_err(write_err)?;
        }
        wtr.flush().map_err(|err| write_err(err.into()))?;
        log::info!("The normalized CSV file was saved to {}", path.display());
        Ok(())
    }
}

/// Reads a comma separated file with a header row.
pub fn load(path: &Path) -> Result<AddressTable> {
    if path.as_os_str().is_empty() {
        return Err(usecases::Error::MissingFile.into());
    }
    let parse_err = |source| Error::Parse {
        path: PathBuf::from(path),
        source,
    };
    let mut rdr = csv::Reader::from_path(path).map_err(parse_err)?;
    let headers = rdr.headers().map_err(parse_err)?.clone();
    let address_idx = usecases::check_schema(&headers.iter().collect::<Vec<_>>())?;
    let rows = rdr
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(parse_err)?;
    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(AddressTable {
        headers,
        address_idx,
        rows,
    })
}

/// Loads, normalizes and stores the address table.
pub fn normalize_and_store(input: &Path, output: &Path) -> Result<AddressTable> {
    let mut table = load(input)?;
    table.normalize();
    table.store(output)?;
    Ok(table)
}
