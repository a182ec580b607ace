use crate::prelude::*;
use csv::{StringRecord, StringRecordsIntoIter};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// A lazy, single-pass sequence of address records.
///
/// Reopen the file to iterate once more.
pub struct AddressRecords {
    path: PathBuf,
    headers: StringRecord,
    address_idx: usize,
    rows: StringRecordsIntoIter<File>,
}

impl std::fmt::Debug for AddressRecords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressRecords")
            .field("path", &self.path)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

pub fn reopen(path: &Path) -> Result<AddressRecords> {
    let invalid = |source| Error::LayerInvalid {
        path: path.to_owned(),
        source,
    };
    let mut rdr = csv::Reader::from_path(path).map_err(invalid)?;
    let headers = rdr.headers().map_err(invalid)?.clone();
    let address_idx = usecases::check_schema(&headers.iter().collect::<Vec<_>>())?;
    log::info!("The CSV layer {} was loaded successfully", path.display());
    Ok(AddressRecords {
        path: path.to_owned(),
        headers,
        address_idx,
        rows: rdr.into_records(),
    })
}

impl AddressRecords {
    fn to_address_record(&self, row: &StringRecord) -> AddressRecord {
        let address = row.get(self.address_idx).unwrap_or_default().to_owned();
        let passthrough = self
            .headers
            .iter()
            .zip(row.iter())
            .enumerate()
            .filter(|(i, _)| *i != self.address_idx)
            .map(|(_, (header, value))| (header.to_owned(), value.to_owned()))
            .collect();
        AddressRecord {
            address,
            passthrough,
        }
    }
}

impl Iterator for AddressRecords {
    type Item = Result<AddressRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(match row {
            Ok(row) => Ok(self.to_address_record(&row)),
            Err(source) => Err(Error::LayerInvalid {
                path: self.path.clone(),
                source,
            }),
        })
    }
}
