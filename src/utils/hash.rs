//! Content hashing utilities.

use xxhash_rust::xxh3::xxh3_64;

/// Compute a content hash for arbitrary bytes
#[must_use]
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Rewrite `\r\n` and lone `\r` as `\n` so hashes agree across platforms.
#[must_use]
pub fn normalize_line_endings(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Hash contribution of one source unit: its name mixed with its normalised content.
///
/// Contributions are meant to be combined with XOR, so this function must not
/// depend on anything but the unit itself.
#[must_use]
pub fn source_unit_hash(name: &str, content: &str) -> u64 {
    let body = content_hash(normalize_line_endings(content).as_bytes());
    content_hash(name.as_bytes())
        .wrapping_mul(31)
        .wrapping_add(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash() {
        let data = b"hello world";
        let hash = content_hash(data);
        assert_ne!(hash, 0);
        assert_eq!(hash, content_hash(data));
        assert_ne!(hash, content_hash(b"hello world!"));
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_line_endings("\r\r\n"), "\n\n");
        assert_eq!(normalize_line_endings("plain"), "plain");
    }

    #[test]
    fn test_source_unit_hash_ignores_line_endings() {
        assert_eq!(
            source_unit_hash("Widget.java", "class A {\r\n}\r\n"),
            source_unit_hash("Widget.java", "class A {\n}\n")
        );
        assert_ne!(
            source_unit_hash("Widget.java", "class A {}"),
            source_unit_hash("Gadget.java", "class A {}")
        );
    }
}
