use std::fmt;
use std::rc::Rc;

use crate::parser::{Parser, ParserNode};
use crate::position::Position;
use crate::trampoline::{Continuation, Trampoline};
use crate::value::{Tag, Value};

pub(crate) struct Sequence {
    pub(crate) children: Vec<Parser>,
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sequence").field(&self.children.len()).finish()
    }
}

impl ParserNode for Sequence {
    fn invoke(self: Rc<Self>, position: Position, trampoline: Trampoline, continuation: Continuation) {
        step(self, 0, Vec::new(), position, trampoline, continuation);
    }
}

/// Thread one child's result into the next child's invocation, left to right, each hop routed
/// through [`Trampoline::push`] so shared sub-parses stay memoized and cyclic children don't
/// recurse unboundedly.
fn step(
    this: Rc<Sequence>,
    index: usize,
    values: Vec<Value>,
    position: Position,
    trampoline: Trampoline,
    continuation: Continuation,
) {
    if index == this.children.len() {
        continuation(Value::Node(Tag::Seq, values), position);
        return;
    }

    let child = this.children[index].clone();
    let next_trampoline = trampoline.clone();
    trampoline.push(
        &child,
        position,
        Rc::new(move |value: Value, remaining: Position| {
            let mut values = values.clone();
            values.push(value);
            step(
                this.clone(),
                index + 1,
                values,
                remaining,
                next_trampoline.clone(),
                continuation.clone(),
            );
        }),
    );
}

/// Build a sequence of parsers. Items that convert `Into<Parser>` (string literals included, per
/// [`Parser`]'s `From<&str>`/`From<String>` impls) are accepted directly.
///
/// An empty sequence degenerates to [`crate::epsilon`].
pub fn sequence<T: Into<Parser>>(children: impl IntoIterator<Item = T>) -> Parser {
    let children: Vec<Parser> = children.into_iter().map(Into::into).collect();
    crate::intern::sequence(children)
}
