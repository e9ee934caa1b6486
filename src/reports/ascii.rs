//! Console-safe rendering of report text.

use super::text::ATTENTION_MARKER;

/// Make report text safe for ASCII-only consoles.
///
/// The attention marker becomes `!!!`, every other non-ASCII character is
/// dropped and trailing whitespace is removed.
#[must_use]
pub fn to_console_ascii(text: &str) -> String {
    text.replace(ATTENTION_MARKER, "!!!")
        .chars()
        .filter(char::is_ascii)
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_and_emoji() {
        let text = "* a.W - made final \u{2757}\nCompatibility status of API changes: MAJOR \u{1F92F}\n";
        assert_eq!(
            to_console_ascii(text),
            "* a.W - made final !!!\nCompatibility status of API changes: MAJOR"
        );
    }

    #[test]
    fn test_plain_ascii_is_untouched_apart_from_trailing_space() {
        assert_eq!(to_console_ascii("+ a.B\n  "), "+ a.B");
        assert_eq!(to_console_ascii(""), "");
    }
}
