use std::fmt;

/// A byte offset into the shared input buffer of a single parse.
///
/// Equality and hashing are by offset only, never by the characters at that offset — this is
/// what keeps memo-table keys cheap. Two `Position`s compare equal iff they denote the same
/// offset into the *same* input; comparing positions from different parses is meaningless but
/// not checked, since a [`Position`] carries no reference back to its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub usize);

impl Position {
    /// The starting position of any input.
    pub const START: Position = Position(0);

    /// Advance this position by `len` bytes.
    pub fn advance(self, len: usize) -> Position {
        Position(self.0 + len)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
