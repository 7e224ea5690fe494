//! The terse `term`/`seq`/`alt`/`red` constructors from the base spec's external-interface
//! section, layered over the primitive combinators in this module.

use std::rc::Rc;

use crate::combinator::{alternatives, reduce, sequence, terminal};
use crate::parser::Parser;
use crate::value::Action;

/// `term(literal)`: an un-reduced terminal. Equivalent to [`crate::terminal`].
pub fn term(literal: impl Into<Rc<str>>) -> Parser {
    terminal(literal)
}

/// `term(literal, action)`: a terminal immediately reduced by `action`.
pub fn term_reduced(literal: impl Into<Rc<str>>, action: Action) -> Parser {
    reduce(terminal(literal), Some(action))
}

/// `seq(children)`: a plain, un-reduced sequence. Equivalent to [`crate::sequence`].
pub fn seq<T: Into<Parser>>(children: impl IntoIterator<Item = T>) -> Parser {
    sequence(children)
}

/// `seq(children, action)`: a sequence immediately reduced by `action`.
pub fn seq_reduced<T: Into<Parser>>(children: impl IntoIterator<Item = T>, action: Action) -> Parser {
    reduce(sequence(children), Some(action))
}

/// `alt(children)`: plain alternation, no reduction. Equivalent to [`crate::alternatives`].
pub fn alt<T: Into<Parser>>(children: impl IntoIterator<Item = T>) -> Parser {
    alternatives(children)
}

/// `alt(children, action)`: alternation immediately reduced by `action`.
pub fn alt_reduced<T: Into<Parser>>(children: impl IntoIterator<Item = T>, action: Action) -> Parser {
    reduce(alternatives(children), Some(action))
}

/// `red(parser, action)`: explicit reduction (never the identity — use `reduce(p, None)` for
/// that).
pub fn red(parser: impl Into<Parser>, action: Action) -> Parser {
    reduce(parser.into(), Some(action))
}
