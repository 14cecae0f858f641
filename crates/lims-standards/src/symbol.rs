/// Separator placed between runs of letters and digits in a symbol.
pub const SYMBOL_SEPARATOR: char = '_';

/// Derives the symbolic key for a vocabulary name.
///
/// Letters and digits (Unicode-aware, so `ø`/`æ`/`å` survive) are kept as-is.
/// Any run of other characters becomes a single [`SYMBOL_SEPARATOR`], and
/// no separator is emitted at either end. A name without letters or digits
/// yields an empty string.
pub fn derive_symbol(name: &str) -> String {
    let mut symbol = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !symbol.is_empty() {
                symbol.push(SYMBOL_SEPARATOR);
            }
            pending_separator = false;
            symbol.push(ch);
        } else {
            pending_separator = true;
        }
    }
    symbol
}

/// Returns `true` if `symbol` is a valid vocabulary key.
///
/// Valid keys are non-empty, contain only letters, digits and single
/// separators, and never start or end with a separator.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol
            .split(SYMBOL_SEPARATOR)
            .all(|part| !part.is_empty() && part.chars().all(char::is_alphanumeric))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(derive_symbol("Okse"), "Okse");
        assert_eq!(derive_symbol("Regnbueørred"), "Regnbueørred");
    }

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(derive_symbol("Blod (EDTA)"), "Blod_EDTA");
        assert_eq!(derive_symbol("  Vildtlevende   fugl "), "Vildtlevende_fugl");
        assert_eq!(derive_symbol("--a__b--"), "a_b");
        assert_eq!(derive_symbol("Type 2/3"), "Type_2_3");
    }

    #[test]
    fn empty_when_no_letters_or_digits() {
        assert_eq!(derive_symbol(""), "");
        assert_eq!(derive_symbol(" - / "), "");
    }

    #[test]
    fn validity() {
        assert!(is_valid_symbol("Blod_EDTA"));
        assert!(is_valid_symbol("Får"));
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("_Blod"));
        assert!(!is_valid_symbol("Blod_"));
        assert!(!is_valid_symbol("Blod__EDTA"));
        assert!(!is_valid_symbol("Blod EDTA"));
    }

    #[test]
    fn derived_symbols_are_valid() {
        for name in ["Okse", "Blod (EDTA)", " x ", "Høns/ænder 2"] {
            assert!(is_valid_symbol(&derive_symbol(name)), "{name}");
        }
    }
}
