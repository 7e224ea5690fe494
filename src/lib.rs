//! A general context-free parser combinator engine.
//!
//! Unlike a typical recursive-descent or LL(1) combinator library, the parsers built here can be
//! left-recursive, ambiguous, or mutually cyclic, and a parse yields the *complete* lazy set of
//! successful results rather than a single best guess. This works by routing every parser
//! invocation through a [`Trampoline`]: a worklist scheduler that memoizes each `(parser,
//! position)` pair, collects every distinct result discovered for it, and re-fires every
//! continuation registered against it exactly once per result. That memoization is what breaks
//! direct and indirect left recursion — a recursive re-entry into an in-progress `(parser,
//! position)` pair subscribes for results instead of recomputing them.
//!
//! ```
//! use ricochet::prelude::*;
//!
//! // S ::= "a" S | "a"
//! let s = define_parser("s", |s, _tag| {
//!     alt([seq([term("a"), s.clone()]), term("a")])
//! });
//!
//! for tree in s.parse("aaa") {
//!     assert_eq!(tree.flatten(), "aaa");
//! }
//! ```

mod combinator;
mod driver;
mod intern;
mod parser;
mod position;
mod trampoline;
mod value;

pub use crate::combinator::{
    alt, alt_reduced, alternatives, define_parser, epsilon, many, many1, maybe, red, reduce, seq,
    seq_reduced, sequence, term, term_reduced, terminal,
};
pub use crate::driver::ParseStream;
pub use crate::parser::Parser;
pub use crate::position::Position;
pub use crate::trampoline::Trampoline;
pub use crate::value::{Action, Tag, Value};

/// Commonly used functions and types, for a single glob import.
pub mod prelude {
    pub use crate::{
        alt, alt_reduced, alternatives, define_parser, epsilon, many, many1, maybe, red, reduce,
        seq, seq_reduced, sequence, term, term_reduced, terminal, Action, ParseStream, Parser,
        Tag, Value,
    };
}
