use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::position::Position;
use crate::trampoline::{Continuation, ParserId, Trampoline};
use crate::value::Value;

/// The continuation-passing protocol every combinator implements.
///
/// This trait is crate-private: callers never implement it themselves, only compose the
/// combinators in [`crate::combinator`]. `invoke` takes `self: Rc<Self>` (rather than `&self`)
/// so that a combinator can cheaply clone its own handle into the closures it hands to
/// [`Trampoline::push`].
pub(crate) trait ParserNode: fmt::Debug {
    fn invoke(self: Rc<Self>, position: Position, trampoline: Trampoline, continuation: Continuation);
}

/// An opaque, cheaply-`Clone`-able handle to a constructed parser.
///
/// `Parser` is the public face of every combinator in this crate: [`crate::terminal`],
/// [`crate::sequence`], [`crate::alternatives`], [`crate::reduce`], and the rest all return one.
/// Two handles returned by the same memoizing constructor call for the same arguments share
/// their underlying identity (see `crate::intern`), which is what the trampoline's memo table
/// relies on to detect recursive re-entry.
#[derive(Clone)]
pub struct Parser(pub(crate) Rc<dyn ParserNode>);

impl Parser {
    pub(crate) fn new(node: Rc<dyn ParserNode>) -> Self {
        Parser(node)
    }

    /// This parser's stable identity, used as half of a memo-table key.
    pub(crate) fn id(&self) -> ParserId {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    pub(crate) fn invoke(&self, position: Position, trampoline: Trampoline, continuation: Continuation) {
        self.0.clone().invoke(position, trampoline, continuation);
    }

    /// Parse `input`, returning a lazy sequence of every distinct full-match parse value.
    ///
    /// See [`crate::ParseStream`] for how laziness interacts with ambiguous or infinite
    /// grammars: pulling only the first element never forces the engine past the batch of
    /// results it produced first.
    pub fn parse(&self, input: &str) -> crate::driver::ParseStream {
        crate::driver::parse(self.clone(), input)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser({:?} @ {:#x})", self.0, self.id())
    }
}

impl From<&str> for Parser {
    fn from(literal: &str) -> Self {
        crate::combinator::terminal(literal)
    }
}

impl From<String> for Parser {
    fn from(literal: String) -> Self {
        crate::combinator::terminal(literal)
    }
}

impl From<&Parser> for Parser {
    fn from(parser: &Parser) -> Self {
        parser.clone()
    }
}

/// A lazily-bound grammar rule, used to express direct or indirect recursion.
///
/// A rule's body can refer to the rule's own [`Parser`] handle (via [`Recursive::handle`])
/// before that body has been fully constructed; the indirection cell is filled in once, by
/// [`Recursive::define`], after construction completes. [`crate::define_parser`] and
/// [`crate::many`] are both built on this mechanism — the former to let user grammars recurse,
/// the latter to give `many(p)` a stable self-referential identity.
pub struct Recursive {
    cell: Rc<RecursiveCell>,
}

struct RecursiveCell {
    name: Option<Rc<str>>,
    body: RefCell<Option<Parser>>,
}

impl fmt::Debug for RecursiveCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Recursive({name:?})"),
            None => write!(f, "Recursive(<anonymous>)"),
        }
    }
}

impl ParserNode for RecursiveCell {
    fn invoke(self: Rc<Self>, position: Position, trampoline: Trampoline, continuation: Continuation) {
        let body = self
            .body
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("recursive parser {self:?} used before its body was defined"));
        trampoline.push(&body, position, continuation);
    }
}

impl Recursive {
    /// Create a new, as-yet-undefined recursive rule.
    pub(crate) fn new(name: Option<Rc<str>>) -> Self {
        Recursive {
            cell: Rc::new(RecursiveCell {
                name,
                body: RefCell::new(None),
            }),
        }
    }

    /// A clone of this rule's stable `Parser` handle, usable inside its own body before
    /// [`define`](Recursive::define) is called.
    pub(crate) fn handle(&self) -> Parser {
        Parser::new(self.cell.clone())
    }

    /// Bind this rule's body. Must be called exactly once.
    pub(crate) fn define(&self, body: Parser) {
        let mut slot = self.cell.body.borrow_mut();
        assert!(slot.is_none(), "recursive parser {:?} defined twice", self.cell);
        *slot = Some(body);
    }
}
