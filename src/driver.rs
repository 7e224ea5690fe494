use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::parser::Parser;
use crate::position::Position;
use crate::trampoline::Trampoline;
use crate::value::Value;

/// The lazy sequence of full-match parse values returned by [`Parser::parse`].
///
/// `ParseStream` is an ordinary `Iterator`, but its `next()` interleaves production with
/// draining the underlying [`Trampoline`]'s worklist: it runs the trampoline only until at least
/// one new full-match result is available (or the trampoline has no work left), then yields
/// results one at a time out of that batch before resuming the drain. This is what lets a
/// caller that only wants the first parse tree of an infinite or exponentially ambiguous grammar
/// get one back promptly, instead of forcing the whole (possibly unbounded) result set.
///
/// Dropping a `ParseStream` before exhausting it drops its `Trampoline` handle; once nothing else
/// references the trampoline's state, the memo table is deallocated and no further work happens.
pub struct ParseStream {
    trampoline: Trampoline,
    accumulator: Rc<RefCell<Vec<Value>>>,
    pending: VecDeque<Value>,
}

impl Iterator for ParseStream {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        loop {
            if let Some(value) = self.pending.pop_front() {
                return Some(value);
            }

            if !self.trampoline.has_next() {
                return None;
            }

            while self.trampoline.has_next() && self.accumulator.borrow().is_empty() {
                self.trampoline.step();
            }

            self.pending.extend(self.accumulator.borrow_mut().drain(..));

            if self.pending.is_empty() {
                // The trampoline ran dry without ever filling the accumulator.
                return None;
            }
        }
    }
}

/// Build a fresh [`Trampoline`] over `input`, seed it with `parser` at position zero through the
/// ordinary memoizing `push` path, and return the resulting lazy stream.
pub(crate) fn parse(parser: Parser, input: &str) -> ParseStream {
    let input: Rc<str> = Rc::from(input);
    let input_len = input.len();
    let trampoline = Trampoline::new(input);
    let accumulator: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = accumulator.clone();
    let default_continuation = Rc::new(move |value: Value, remaining: Position| {
        if remaining.0 == input_len {
            sink.borrow_mut().push(value);
        }
    });

    trampoline.push(&parser, Position::START, default_continuation);

    ParseStream {
        trampoline,
        accumulator,
        pending: VecDeque::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::combinator::terminal;

    #[test]
    fn failure_yields_an_empty_stream() {
        let results: Vec<_> = terminal("a").parse("b").collect();
        assert!(results.is_empty());
    }

    #[test]
    fn take_one_does_not_force_the_whole_stream() {
        // many("a") on an unbounded-looking input still terminates, but this checks that asking
        // for just the first element doesn't require collecting the rest first.
        let p = crate::many("a");
        let first = p.parse("aaaaaaaaaa").next();
        assert!(first.is_some());
    }
}
