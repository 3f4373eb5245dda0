use std::sync::LazyLock;

use regex::Regex;

/// Characters rejected by the most restrictive common filesystem (NTFS).
static RESERVED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).expect("invalid reserved-character pattern"));

/// One chapter of the catalog page, in link order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    /// 1-based, contiguous.
    pub index: usize,
    /// Empty when the page had no usable chapter titles.
    pub name: String,
    pub link: String,
}

impl ChapterEntry {
    pub fn new(index: usize, name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            link: link.into(),
        }
    }

    pub fn filename(&self) -> String {
        build_filename(self.index, &self.name)
    }
}

/// Builds `"{index:03}_{name}.pdf"`, or `"{index:03}.pdf"` for an empty name.
///
/// Reserved characters are deleted from the name, not replaced. Indices of
/// 1000 and above simply widen the number.
pub fn build_filename(index: usize, name: &str) -> String {
    if name.is_empty() {
        return format!("{:03}.pdf", index);
    }
    let cleaned = RESERVED_CHARS.replace_all(name, "");
    format!("{:03}_{}.pdf", index, cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_chapter() {
        assert_eq!(build_filename(3, "test"), "003_test.pdf");
    }

    #[test]
    fn reserved_characters_are_deleted() {
        assert_eq!(build_filename(23, "Was tun?"), "023_Was tun.pdf");
        assert_eq!(
            build_filename(7, r#"a\b/c*d?e:f"g<h>i|j"#),
            "007_abcdefghij.pdf"
        );
    }

    #[test]
    fn unnamed_chapter() {
        assert_eq!(build_filename(12, ""), "012.pdf");
    }

    #[test]
    fn name_made_only_of_reserved_characters_keeps_separator() {
        assert_eq!(build_filename(4, "???"), "004_.pdf");
    }

    #[test]
    fn wide_index_is_not_truncated() {
        assert_eq!(build_filename(1234, "Index"), "1234_Index.pdf");
        assert_eq!(build_filename(1000, ""), "1000.pdf");
    }

    #[test]
    fn repeated_calls_agree() {
        let first = build_filename(9, "Häufige Fehler: Teil 1");
        let second = build_filename(9, "Häufige Fehler: Teil 1");
        assert_eq!(first, second);
        assert_eq!(first, "009_Häufige Fehler Teil 1.pdf");
    }

    #[test]
    fn entry_filename_uses_index_and_name() {
        let entry = ChapterEntry::new(2, "Einleitung", "https://example.com/doi/pdf/x");
        assert_eq!(entry.filename(), "002_Einleitung.pdf");
    }
}
