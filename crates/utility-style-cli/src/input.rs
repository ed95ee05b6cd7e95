//! Reading tool input.

use std::io::Read;

use crate::error::Result;

/// Read all of `reader` as text.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected, so stray
/// bytes end up as tokens no rule claims.
pub fn read_lossy(mut reader: impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use utility_style::prelude::{rewrite_class_names, Translator};

    #[test]
    fn valid_utf8_is_unchanged() {
        let input = read_lossy("flex-row mb-4\n".as_bytes()).unwrap();
        assert_eq!(input, "flex-row mb-4\n");
    }

    #[test]
    fn invalid_bytes_become_unclaimed_tokens() {
        let input = read_lossy(&b"mb-4 \xff\xfe"[..]).unwrap();
        assert_eq!(input, "mb-4 \u{fffd}\u{fffd}");

        let report = Translator::new().translate_report(&input).unwrap();
        assert_eq!(report.ignored, ["\u{fffd}\u{fffd}"]);
        assert_eq!(Translator::new().translate(&input), "{ marginBottom: 16 }");
    }

    #[test]
    fn invalid_bytes_in_rewrite_source() {
        let input = read_lossy(&b"<View className=\"p-1\" />\xff"[..]).unwrap();
        let (out, summary) = rewrite_class_names(&input, &Translator::new()).unwrap();
        assert_eq!(out, "<View style={{ padding: 4 }} />\u{fffd}");
        assert_eq!(summary.rewritten, 1);
    }
}
