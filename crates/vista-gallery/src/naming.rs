//! Display names for numbered catalog entries
//!
//! Catalog folders and files carry an ordering prefix (`"4. Brimax"`,
//! `"10.png"`). The prefix decides tile order and is stripped for display.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sort key for entries without a numeric prefix
pub const UNNUMBERED: u32 = 999;

static NUMBER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.").expect("valid number prefix regex"));

static DISPLAY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("valid display prefix regex"));

/// Numeric ordering prefix of `name`, or [`UNNUMBERED`]
#[must_use]
pub fn extract_number(name: &str) -> u32 {
    NUMBER_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(UNNUMBERED)
}

/// `name` without its numeric prefix, trimmed
#[must_use]
pub fn clean_project_name(name: &str) -> String {
    DISPLAY_PREFIX.replace(name, "").trim().to_string()
}

/// `file` without its last extension
#[must_use]
pub fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(dot) if dot + 1 < file.len() => &file[..dot],
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sort_prefix() {
        assert_eq!(extract_number("4. Brimax"), 4);
        assert_eq!(extract_number("39. Capex Reduction for ABL"), 39);
        assert_eq!(extract_number("10.png"), 10);
        assert_eq!(extract_number("Brimax"), UNNUMBERED);
        assert_eq!(extract_number("4 Brimax"), UNNUMBERED);
    }

    #[test]
    fn cleans_prefix_and_whitespace() {
        assert_eq!(clean_project_name("28. ZORBA  Aluminium Processing Unit"), "ZORBA  Aluminium Processing Unit");
        assert_eq!(clean_project_name("2. SRC Pvt.Ltd"), "SRC Pvt.Ltd");
        assert_eq!(clean_project_name("Lemon Tree"), "Lemon Tree");
    }

    #[test]
    fn flat_file_title() {
        // "3.png" loses the extension first, leaving a bare number
        assert_eq!(clean_project_name(strip_extension("3.png")), "3");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("trailing."), "trailing.");
    }
}
