//! Canonicalizing caches from constructor arguments to [`Parser`] identity.
//!
//! The base specification requires that, e.g., `terminal("a")` called twice yield the *same*
//! parser identity — otherwise the trampoline's memo table can't recognize that two calls are
//! the same recursive re-entry, and left-recursive grammars would simply loop forever building
//! fresh, unmemoized parser instances. Each combinator constructor that takes arguments routes
//! through one of the caches below instead of allocating a new node unconditionally.
//!
//! These are `thread_local!` rather than, say, fields on some `Grammar` context object: parsers
//! are meant to be ordinary values constructed once at grammar-definition time (the base spec's
//! "Lifecycle" note) and are stateless and immutable once built, so sharing them process-wide
//! costs a little memory and nothing else.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::combinator::{Alternatives, Reduce, Sequence, Terminal};
use crate::parser::{Parser, Recursive};
use crate::trampoline::ParserId;
use crate::value::Action;

thread_local! {
    static TERMINALS: RefCell<FxHashMap<Rc<str>, Parser>> = RefCell::new(FxHashMap::default());
    static SEQUENCES: RefCell<FxHashMap<Vec<ParserId>, Parser>> = RefCell::new(FxHashMap::default());
    static ALTERNATIVES: RefCell<FxHashMap<Vec<ParserId>, Parser>> = RefCell::new(FxHashMap::default());
    static REDUCTIONS: RefCell<FxHashMap<(ParserId, Option<Action>), Parser>> = RefCell::new(FxHashMap::default());
    static MANY: RefCell<FxHashMap<ParserId, Parser>> = RefCell::new(FxHashMap::default());
    static EPSILON: RefCell<Option<Parser>> = RefCell::new(None);
}

pub(crate) fn terminal(literal: Rc<str>) -> Parser {
    TERMINALS.with(|cache| {
        cache
            .borrow_mut()
            .entry(literal.clone())
            .or_insert_with(|| Parser::new(Rc::new(Terminal { literal })))
            .clone()
    })
}

pub(crate) fn epsilon() -> Parser {
    EPSILON.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| Parser::new(Rc::new(crate::combinator::Epsilon)))
            .clone()
    })
}

pub(crate) fn sequence(children: Vec<Parser>) -> Parser {
    if children.is_empty() {
        return epsilon();
    }
    let key: Vec<ParserId> = children.iter().map(Parser::id).collect();
    SEQUENCES.with(|cache| {
        cache
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Parser::new(Rc::new(Sequence { children })))
            .clone()
    })
}

pub(crate) fn alternatives(children: Vec<Parser>) -> Parser {
    let key: Vec<ParserId> = children.iter().map(Parser::id).collect();
    ALTERNATIVES.with(|cache| {
        cache
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Parser::new(Rc::new(Alternatives { children })))
            .clone()
    })
}

pub(crate) fn reduce(child: Parser, action: Option<Action>) -> Parser {
    let key = (child.id(), action.clone());
    REDUCTIONS.with(|cache| {
        cache
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| Parser::new(Rc::new(Reduce { child, action })))
            .clone()
    })
}

/// `many(p)`'s defining equation references `many(p)` itself; this cache makes the recursive
/// occurrence resolve to the exact same handle as the one returned to the caller, using a
/// `Recursive` indirection cell the same way `define_parser` does for user-level rules.
pub(crate) fn many(child: Parser) -> Parser {
    let key = child.id();
    if let Some(existing) = MANY.with(|cache| cache.borrow().get(&key).cloned()) {
        return existing;
    }
    let recursive = Recursive::new(None);
    let handle = recursive.handle();
    MANY.with(|cache| cache.borrow_mut().insert(key, handle.clone()));
    let body = alternatives(vec![epsilon(), sequence(vec![child, handle.clone()])]);
    recursive.define(body);
    handle
}
