use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits a line-oriented reader into whitespace-separated tokens, so several
/// answers typed on one line are consumed one prompt at a time.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_across_lines() {
        let mut tokens = TokenReader::new(Cursor::new("1  2\n\n   \n4 a.com\n"));

        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("4"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("a.com"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut tokens = TokenReader::new(Cursor::new(""));
        assert_eq!(tokens.next_token().unwrap(), None);
    }
}
