/// Name of the input column that holds the free-text address.
pub const ADDRESS_COLUMN: &str = "adresse";

/// A single row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRecord {
    pub address: String,
    /// All other columns of the row as `(header, value)` pairs
    /// in the order of the input file.
    pub passthrough: Vec<(String, String)>,
}

impl AddressRecord {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            passthrough: vec![],
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        if column == ADDRESS_COLUMN {
            return Some(&self.address);
        }
        self.passthrough
            .iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_address_and_passthrough_columns() {
        let record = AddressRecord {
            address: "1+Rue+de+la+Paix+Paris".into(),
            passthrough: vec![("nom".into(), "Opéra".into())],
        };
        assert_eq!(record.get("adresse"), Some("1+Rue+de+la+Paix+Paris"));
        assert_eq!(record.get("nom"), Some("Opéra"));
        assert_eq!(record.get("missing"), None);
    }
}
