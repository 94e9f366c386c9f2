//! Percent-encoding for URL components.

/// Encode `input` for use inside a URL path segment or query value.
///
/// Matches `encodeURIComponent`: ASCII alphanumerics and `-_.!~*'()` pass
/// through, every other byte of the UTF-8 encoding becomes `%XX`.
pub fn encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_component("a b/c?d"), "a%20b%2Fc%3Fd");
        assert_eq!(encode_component("Mary-Ann_(x)"), "Mary-Ann_(x)");
    }

    #[test]
    fn multibyte_characters_are_escaped_per_byte() {
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
