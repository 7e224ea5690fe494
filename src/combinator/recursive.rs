use std::rc::Rc;

use crate::parser::{Parser, Recursive};
use crate::value::Action;

/// Bind a recursive grammar rule.
///
/// `body` receives two things before it has finished building the rule's definition: a clone of
/// the rule's own handle (so the rule can refer to itself, directly or through other rules, for
/// direct or indirect left recursion), and `tag`, an [`Action`] carrying `name` — the "sentinel
/// action `tag`" of the base spec's external-interface section, handed to `body` explicitly
/// rather than pulled from an ambient/thread-local "current rule" context.
///
/// ```
/// use ricochet::prelude::*;
///
/// let expr = define_parser("expr", |expr, tag| {
///     alt([
///         seq_reduced([expr.clone(), "+".into(), expr.clone()], tag.clone()),
///         term("0"),
///     ])
/// });
///
/// assert_eq!(expr.parse("0+0").count(), 1);
/// ```
pub fn define_parser(
    name: impl Into<Rc<str>>,
    body: impl FnOnce(&Parser, Action) -> Parser,
) -> Parser {
    let name = name.into();
    let recursive = Recursive::new(Some(name.clone()));
    let handle = recursive.handle();
    let tag = Action::symbol(name);
    let constructed = body(&handle, tag);
    recursive.define(constructed);
    handle
}
