use geocsv_entities::address::ADDRESS_COLUMN;

/// Returns the index of the address column.
pub fn address_column_index<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    headers.iter().position(|h| h.as_ref() == ADDRESS_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_address_column() {
        assert_eq!(address_column_index(&["nom", "adresse"]), Some(1));
        assert_eq!(address_column_index(&["adresse"]), Some(0));
    }

    #[test]
    fn column_name_must_match_exactly() {
        assert_eq!(address_column_index(&["Adresse", " adresse", "address"]), None);
        assert_eq!(address_column_index::<&str>(&[]), None);
    }
}
