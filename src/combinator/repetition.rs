use crate::combinator::{alternatives, epsilon, sequence};
use crate::parser::Parser;

/// Zero-or-one: `alternatives([epsilon(), p])`.
///
/// Declaration order matters for the FIFO tie-break described in §4.1: the empty match is always
/// enqueued first, so a fully-ambiguous grammar sees it before `p`'s own result, though both
/// still appear in the final (unordered) result set.
pub fn maybe(p: impl Into<Parser>) -> Parser {
    alternatives([epsilon(), p.into()])
}

/// Zero-or-more, GLL-style: `alternatives([epsilon(), sequence([p, many(p)])])`.
///
/// The recursive occurrence of `many(p)` on the right-hand side resolves to the *same* `Parser`
/// identity as the handle returned to the caller (see `crate::intern::many`), which is what lets
/// the trampoline's memo table terminate repetition over a cyclic or left-recursive `p` the same
/// way it terminates any other recursive grammar rule.
pub fn many(p: impl Into<Parser>) -> Parser {
    crate::intern::many(p.into())
}

/// One-or-more: `sequence([p, many(p)])`.
pub fn many1(p: impl Into<Parser>) -> Parser {
    let p = p.into();
    sequence::<Parser>([p.clone(), many(p)])
}
