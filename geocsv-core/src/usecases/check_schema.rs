use super::prelude::*;
use crate::util::validate;

/// Returns the position of the address column within `headers`.
pub fn check_schema<S: AsRef<str>>(headers: &[S]) -> Result<usize> {
    validate::address_column_index(headers).ok_or(Error::MissingColumn(ADDRESS_COLUMN))
}
