/// A line/column location in source text, used for diagnostics.
///
/// Lines are 1-based. The first character of a line is column 1; a newline
/// character sits at column 0 of the line it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A saved cursor state. Restoring it with [`Cursor::rewind`] puts the
/// cursor back exactly where [`Cursor::checkpoint`] was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
    current: Option<char>,
    position: Position,
}

/// Position-tracking character stream.
///
/// `current()` is the character most recently loaded by [`advance`](Cursor::advance),
/// i.e. the one at `offset() - 1`; `None` marks end of input.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    offset: usize,
    current: Option<char>,
    line: usize,
    column: usize,
}

impl Cursor {
    /// Create a cursor over `text`, positioned on its first character.
    pub fn new(text: &str) -> Self {
        Self::with_origin(text, Position::new(1, 0))
    }

    /// Create a cursor over `text` as if it continued right after `origin`.
    ///
    /// Used for embedded expression bodies so diagnostics point into the
    /// enclosing source rather than into the extracted substring.
    pub fn with_origin(text: &str, origin: Position) -> Self {
        let mut cursor = Self {
            chars: text.chars().collect(),
            offset: 0,
            current: None,
            line: origin.line,
            column: origin.column,
        };
        cursor.advance();
        cursor
    }

    /// Consume the current character and load the next one.
    pub fn advance(&mut self) {
        // Stepping onto end of input moves the column once, then stays put.
        if self.offset == self.chars.len() {
            self.offset += 1;
            self.column += 1;
        }

        match self.chars.get(self.offset) {
            Some(&c) => {
                self.offset += 1;
                self.current = Some(c);
                self.column += 1;
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                }
            }
            None => self.current = None,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The character after `current()`, without consuming anything.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns true if the current and next characters are `first` and `second`.
    pub fn at_pair(&self, first: char, second: char) -> bool {
        self.current == Some(first) && self.peek() == Some(second)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            current: self.current,
            position: self.position(),
        }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.current = checkpoint.current;
        self.line = checkpoint.position.line;
        self.column = checkpoint.position.column;
    }
}
