#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// Letters and digits, with inner apostrophes, hyphens, periods or ampersands
    Word(&'a str),
    /// The possessive clitic split off a word ("'s")
    Possessive(&'a str),
    /// Any other non-space character
    Punct(char),
}
