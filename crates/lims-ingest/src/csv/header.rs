//! CSV header and cell normalization.

/// Normalizes a header: strips a BOM and trims. Inner text is kept as-is.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Normalizes a data cell: strips a BOM and trims.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Prøve id  "), "Prøve id");
        assert_eq!(normalize_header("\u{feff}Prøve id"), "Prøve id");
        assert_eq!(normalize_header("Prøve  id"), "Prøve  id");
    }

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell("  12.1 "), "12.1");
        assert_eq!(normalize_cell(""), "");
    }
}
