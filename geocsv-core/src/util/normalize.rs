/// Prepares an address for being interpolated into a query string.
///
/// Only spaces are replaced by `+`, all other characters are kept.
pub fn normalize_address(address: &str) -> String {
    address.replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_every_space() {
        assert_eq!(
            normalize_address("1 Rue de la Paix Paris"),
            "1+Rue+de+la+Paix+Paris"
        );
        assert_eq!(normalize_address("  a  b "), "++a++b+");
    }

    #[test]
    fn keep_other_characters() {
        assert_eq!(
            normalize_address("12 bis, rue d'Alésia & Co/75014?"),
            "12+bis,+rue+d'Alésia+&+Co/75014?"
        );
        // Only the plain ASCII space is replaced
        assert_eq!(normalize_address("a\tb\u{a0}c"), "a\tb\u{a0}c");
    }

    #[test]
    fn normalization_is_idempotent() {
        for addr in ["", "8 bd du Port", "8+bd+du+Port", "a + b"] {
            let once = normalize_address(addr);
            assert_eq!(normalize_address(&once), once);
        }
    }
}
