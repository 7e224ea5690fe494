use std::fmt;
use std::rc::Rc;

/// An opaque semantic-action descriptor.
///
/// `Action`s are embedded verbatim into a [`Value`] tree by [`reduce`](crate::reduce) and are
/// never evaluated, inspected, or called by the engine itself — they are exactly the "symbols,
/// function references, or arbitrary user tags" of the base specification, represented here as
/// an interned-ish name so they're cheap to clone and compare.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Action(Rc<str>);

impl Action {
    /// Create an action descriptor carrying the given name.
    ///
    /// [`define_parser`](crate::define_parser) uses this to hand a rule its own name as the
    /// `tag` sentinel, but any caller can mint an `Action` this way.
    pub fn symbol(name: impl Into<Rc<str>>) -> Self {
        Action(name.into())
    }

    /// The name this action descriptor carries.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({:?})", self.0)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The discriminator carried by a [`Value::Node`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The default discriminator produced by [`sequence`](crate::sequence).
    Seq,
    /// A discriminator installed by [`reduce`](crate::reduce), replacing `Seq` (or wrapping a
    /// non-sequence child) with a user-supplied action descriptor.
    Action(Action),
}

/// A parse value: the recursive sum type every parser produces on success.
///
/// This is the untyped value tree described by the base specification — unlike a typical Rust
/// parser-combinator library, the output type does not vary from one combinator to the next
/// (there is no generic `O` threaded through [`Parser`](crate::Parser)), because the engine's
/// job is to build this one tree shape and hand it, unevaluated, to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// The literal text matched by a `terminal`.
    Leaf(Rc<str>),
    /// A tagged list of child values, produced by `sequence` (tag `Seq`) or `reduce` (tag
    /// `Action(_)`).
    Node(Tag, Vec<Value>),
    /// The value produced by `epsilon`.
    Empty,
}

impl Value {
    /// Flatten this value's leaves into their concatenated source text, in left-to-right order.
    ///
    /// Useful for tests and for sanity-checking that a parse tree's leaves reconstruct the
    /// matched input (the property exercised by several of the base spec's concrete scenarios).
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            Value::Leaf(s) => out.push_str(s),
            Value::Node(_, children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
            Value::Empty => {}
        }
    }
}
