// Cursor over an immutable LaTeX source string
//
// Positions are byte offsets that always sit on a char boundary.

use memchr::memmem;

/// Scanning position inside a LaTeX source
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`
    #[inline]
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// The full source being scanned
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute byte offset (clamped to the source length)
    pub fn set_position(&mut self, pos: usize) {
        let mut pos = pos.min(self.source.len());
        while !self.source.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
    }

    /// Unconsumed remainder of the source
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Whether the whole source has been consumed
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Next character without consuming it
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether the remainder starts with `pattern`
    #[inline]
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.rest().starts_with(pattern)
    }

    /// Consume and return the next character
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character and return it as a source slice
    pub fn bump_str(&mut self) -> Option<&'a str> {
        let start = self.pos;
        self.bump()?;
        Some(&self.source[start..self.pos])
    }

    /// Skip `bytes` bytes forward
    #[inline]
    pub fn advance(&mut self, bytes: usize) {
        self.set_position(self.pos + bytes);
    }

    /// Consume `pattern` if the remainder starts with it
    pub fn eat(&mut self, pattern: &str) -> bool {
        if self.starts_with(pattern) {
            self.pos += pattern.len();
            true
        } else {
            false
        }
    }

    /// Skip over whitespace
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Consume the longest prefix whose characters satisfy `pred`
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &rest[..len]
    }

    /// Absolute offset of the next occurrence of `needle` at or after the cursor
    pub fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.rest().as_bytes(), needle.as_bytes()).map(|i| self.pos + i)
    }

    /// Source slice between two absolute offsets
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_bump() {
        let mut cursor = Cursor::new("αb");
        assert_eq!(cursor.peek(), Some('α'));
        assert_eq!(cursor.bump(), Some('α'));
        assert_eq!(cursor.position(), 'α'.len_utf8());
        assert_eq!(cursor.bump_str(), Some("b"));
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn test_take_while_and_whitespace() {
        let mut cursor = Cursor::new("frac  {a}");
        assert_eq!(cursor.take_while(|c| c.is_ascii_alphabetic()), "frac");
        cursor.skip_whitespace();
        assert!(cursor.eat("{"));
        assert!(!cursor.eat("}"));
        assert_eq!(cursor.rest(), "a}");
    }

    #[test]
    fn test_find_is_absolute() {
        let mut cursor = Cursor::new("ab\\end{x}\\end{x}");
        cursor.advance(3);
        assert_eq!(cursor.find("\\end{x}"), Some(9));
        assert_eq!(cursor.slice(0, 2), "ab");
    }

    #[test]
    fn test_set_position_stays_on_char_boundary() {
        let mut cursor = Cursor::new("αβ");
        cursor.set_position(1);
        assert_eq!(cursor.peek(), Some('β'));
        cursor.set_position(100);
        assert!(cursor.is_eof());
    }
}
