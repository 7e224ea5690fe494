//! The primitive and derived combinators, and the terse `term`/`seq`/`alt`/`red` constructors
//! built on top of them.

mod alternatives;
mod api;
mod recursive;
mod reduce;
mod repetition;
mod sequence;
mod terminal;

pub(crate) use alternatives::Alternatives;
pub(crate) use reduce::Reduce;
pub(crate) use sequence::Sequence;
pub(crate) use terminal::{Epsilon, Terminal};

pub use alternatives::alternatives;
pub use api::{alt, alt_reduced, red, seq, seq_reduced, term, term_reduced};
pub use recursive::define_parser;
pub use reduce::reduce;
pub use repetition::{many, many1, maybe};
pub use sequence::sequence;
pub use terminal::{epsilon, terminal};
