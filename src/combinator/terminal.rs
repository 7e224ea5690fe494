use std::fmt;
use std::rc::Rc;

use crate::parser::{Parser, ParserNode};
use crate::position::Position;
use crate::trampoline::{Continuation, Trampoline};
use crate::value::Value;

#[derive(Debug)]
pub(crate) struct Terminal {
    pub(crate) literal: Rc<str>,
}

impl ParserNode for Terminal {
    fn invoke(self: Rc<Self>, position: Position, trampoline: Trampoline, continuation: Continuation) {
        let input = trampoline.input();
        if input[position.0..].starts_with(&*self.literal) {
            let end = position.advance(self.literal.len());
            continuation(Value::Leaf(self.literal.clone()), end);
        }
    }
}

/// The empty-input parser. Always succeeds without consuming anything, producing [`Value::Empty`].
#[derive(Debug)]
pub(crate) struct Epsilon;

impl ParserNode for Epsilon {
    fn invoke(self: Rc<Self>, position: Position, _trampoline: Trampoline, continuation: Continuation) {
        continuation(Value::Empty, position);
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.literal)
    }
}

/// Match the literal text `match_text` exactly, producing `Value::Leaf(match_text)`.
///
/// Memoized on the literal's text: two calls to `terminal("a")` return the same [`Parser`]
/// identity, which matters whenever a terminal participates in a cyclic position.
pub fn terminal(match_text: impl Into<Rc<str>>) -> Parser {
    crate::intern::terminal(match_text.into())
}

/// The parser that matches the empty string at any position, producing [`Value::Empty`].
pub fn epsilon() -> Parser {
    crate::intern::epsilon()
}
