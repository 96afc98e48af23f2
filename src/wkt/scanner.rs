use super::WktError;

/// Cursor over a WKT string, positioned at a geometry keyword.
///
/// Grammar:
///
/// ```text
/// geometry := KEYWORD ws* "(" body ")"
/// body     := any characters except ")", at least one
/// ```
///
/// Keywords match case-insensitively and must start a word, so `POINT` does
/// not match inside `MULTIPOINT`. The dashboard's regex is unanchored and
/// reads `MULTIPOINT(1 2)` as the point `(1, 2)`; here multi-geometries yield
/// nothing. Anything before the keyword (such as an `SRID=4326;` prefix) is
/// ignored.
pub(super) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Returns a scanner for every occurrence of `keyword`, in input order.
    pub fn find_all(input: &'a str, keyword: &'static str) -> impl Iterator<Item = Scanner<'a>> {
        let bytes = input.as_bytes();
        let len = keyword.len();
        (0..bytes.len().saturating_sub(len - 1))
            .filter(move |&start| {
                bytes[start..start + len].eq_ignore_ascii_case(keyword.as_bytes())
                    && (start == 0 || !is_word_byte(bytes[start - 1]))
            })
            .map(move |start| Scanner { input, pos: start })
    }

    /// Consumes the keyword and returns the body between the parentheses.
    pub fn body(mut self, keyword: &'static str) -> Result<&'a str, WktError> {
        self.pos += keyword.len();
        self.skip_whitespace();
        if !self.rest().starts_with('(') {
            return Err(WktError::MissingOpeningParen(keyword));
        }
        self.pos += 1;
        let rest = self.rest();
        let end = rest.find(')').ok_or(WktError::Unclosed(keyword))?;
        if end == 0 {
            return Err(WktError::Empty(keyword));
        }
        Ok(&rest[..end])
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Whether `token` only consists of sign, digit, decimal point and exponent
/// characters.
pub(super) fn is_numeric_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
}
