//! Highlight markup handling.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `\b` keeps tags such as `<marker>` or `<marquee>` intact.
    static ref MARK_TAG: Regex = Regex::new(r"(?i)</?mark\b[^>]*>").unwrap();
}

/// Remove `<mark>` highlight tags, keeping the highlighted text and every other tag.
///
/// ```
/// use search_adapter_repository::strip_mark_tags;
///
/// assert_eq!(
///     strip_mark_tags("<mark>cat</mark>s are <b>great</b>"),
///     "cats are <b>great</b>"
/// );
/// ```
pub fn strip_mark_tags(html: &str) -> String {
    MARK_TAG.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keeps_other_markup() {
        assert_eq!(
            strip_mark_tags("<mark>cat</mark>s are <b>great</b>"),
            "cats are <b>great</b>"
        );
    }

    #[test]
    fn test_strip_is_case_insensitive_and_handles_attributes() {
        assert_eq!(
            strip_mark_tags(r#"<MARK class="hl">Hugo</MARK> theme"#),
            "Hugo theme"
        );
    }

    #[test]
    fn test_strip_leaves_similar_tags() {
        let html = "<marker>x</marker> <marquee>y</marquee>";
        assert_eq!(strip_mark_tags(html), html);
    }

    #[test]
    fn test_strip_plain_text_unchanged() {
        assert_eq!(strip_mark_tags("no markup here"), "no markup here");
        assert_eq!(strip_mark_tags(""), "");
    }
}
