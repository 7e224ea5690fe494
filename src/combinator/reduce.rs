use std::fmt;
use std::rc::Rc;

use crate::parser::{Parser, ParserNode};
use crate::position::Position;
use crate::trampoline::{Continuation, Trampoline};
use crate::value::{Action, Tag, Value};

pub(crate) struct Reduce {
    pub(crate) child: Parser,
    pub(crate) action: Option<Action>,
}

impl fmt::Debug for Reduce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduce").field("action", &self.action).finish()
    }
}

impl ParserNode for Reduce {
    fn invoke(self: Rc<Self>, position: Position, trampoline: Trampoline, continuation: Continuation) {
        let Some(action) = self.action.clone() else {
            // A null action descriptor makes `reduce` the identity on `child` (§4.6 / §8 "reduce
            // identity"): push straight through with the caller's own continuation.
            trampoline.push(&self.child, position, continuation);
            return;
        };

        trampoline.push(
            &self.child,
            position,
            Rc::new(move |value: Value, remaining: Position| {
                let reduced = match value {
                    Value::Empty => Value::Node(Tag::Action(action.clone()), Vec::new()),
                    Value::Node(Tag::Seq, children) => Value::Node(Tag::Action(action.clone()), children),
                    other => Value::Node(Tag::Action(action.clone()), vec![other]),
                };
                continuation(reduced, remaining);
            }),
        );
    }
}

/// Apply a semantic action to every value `child` produces.
///
/// `action = None` is the identity: `reduce(p, None)` is observationally indistinguishable from
/// `p` itself (§8 "reduce identity"). Otherwise the action descriptor replaces `child`'s `Seq`
/// tag (flattening its children onto the new node) or wraps a non-sequence value in a
/// single-child node — see [`Value`] for the exact cases.
pub fn reduce(child: Parser, action: Option<Action>) -> Parser {
    crate::intern::reduce(child, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{epsilon, sequence, terminal};

    #[test]
    fn reduce_wraps_leaf_value() {
        let p = reduce(terminal("a"), Some(Action::symbol("lit")));
        let results: Vec<_> = p.parse("a").collect();
        assert_eq!(
            results,
            vec![Value::Node(Tag::Action(Action::symbol("lit")), vec![Value::Leaf("a".into())])]
        );
    }

    #[test]
    fn reduce_flattens_sequence_children() {
        let p = reduce(sequence(["a", "b"]), Some(Action::symbol("pair")));
        let results: Vec<_> = p.parse("ab").collect();
        assert_eq!(
            results,
            vec![Value::Node(
                Tag::Action(Action::symbol("pair")),
                vec![Value::Leaf("a".into()), Value::Leaf("b".into())]
            )]
        );
    }

    #[test]
    fn reduce_of_empty_has_no_children() {
        let p = reduce(epsilon(), Some(Action::symbol("unit")));
        let results: Vec<_> = p.parse("").collect();
        assert_eq!(results, vec![Value::Node(Tag::Action(Action::symbol("unit")), Vec::new())]);
    }

    #[test]
    fn reduce_identity_with_null_action() {
        let base = terminal("a");
        let identity = reduce(terminal("a"), None);
        assert_eq!(base.parse("a").collect::<Vec<_>>(), identity.parse("a").collect::<Vec<_>>());
    }
}
