use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::position::Position;
use crate::value::Value;

/// A callback invoked once per distinct `(value, remaining)` result discovered for the key it
/// was registered against.
pub(crate) type Continuation = Rc<dyn Fn(Value, Position)>;

/// A unit of deferred work on the trampoline's call queue.
pub(crate) type Thunk = Box<dyn FnOnce()>;

/// The stable identity of a parser, used as half of a memo key.
///
/// This is the address backing a parser's `Rc<dyn ParserNode>` allocation — two `Parser` handles
/// produced by the *same* call to a memoizing constructor (see `crate::intern`) share this
/// identity, which is exactly what lets the trampoline recognize recursive re-entry instead of
/// looping forever.
pub(crate) type ParserId = usize;

#[derive(Default)]
struct MemoEntry {
    /// Whether the parser-invoking thunk for this key has already been enqueued. Distinguishes
    /// "first ever push for this key" (step 3 of the base spec's `push`) from "this key has been
    /// seen before" (step 4), independent of whether any results have been found yet.
    started: bool,
    continuations: Vec<Continuation>,
    results: Vec<(Value, Position)>,
}

struct TrampolineState {
    input: Rc<str>,
    queue: VecDeque<Thunk>,
    memo: FxHashMap<(ParserId, Position), MemoEntry>,
}

/// The worklist scheduler and memo table shared by every parser invocation within one parse.
///
/// `Trampoline` is a cheap `Clone` (an `Rc` around its state), so continuations and thunks
/// capture their own handle to it rather than borrowing with a lifetime. There is exactly one
/// `Trampoline` per call to [`Parser::parse`](crate::Parser::parse); it, and its memo table, are
/// dropped once the returned [`ParseStream`](crate::ParseStream) is dropped and nothing else
/// references it.
#[derive(Clone)]
pub struct Trampoline {
    inner: Rc<RefCell<TrampolineState>>,
}

impl Trampoline {
    pub(crate) fn new(input: Rc<str>) -> Self {
        Trampoline {
            inner: Rc::new(RefCell::new(TrampolineState {
                input,
                queue: VecDeque::new(),
                memo: FxHashMap::default(),
            })),
        }
    }

    /// The full input buffer this parse is running over.
    pub(crate) fn input(&self) -> Rc<str> {
        self.inner.borrow().input.clone()
    }

    /// True iff the call queue holds unexecuted work.
    pub fn has_next(&self) -> bool {
        !self.inner.borrow().queue.is_empty()
    }

    /// Pop and run one thunk from the head of the call queue. A no-op when the queue is empty.
    pub fn step(&self) {
        let thunk = self.inner.borrow_mut().queue.pop_front();
        if let Some(thunk) = thunk {
            log::trace!("trampoline: running one thunk");
            thunk();
        }
    }

    /// Append a raw thunk to the tail of the call queue.
    pub(crate) fn push_stack(&self, thunk: Thunk) {
        self.inner.borrow_mut().queue.push_back(thunk);
    }

    /// The memoizing invocation primitive: route a call to `parser` at `position` through the
    /// memo table instead of invoking it directly.
    ///
    /// If `(parser, position)` has never been pushed before, `continuation` becomes its sole
    /// initial continuation and a thunk is enqueued that actually invokes the parser, wrapping
    /// the caller's continuation in one that records each newly discovered result and re-fires
    /// every continuation registered so far. If the key has been pushed before, `continuation`
    /// is appended to its continuation list and replayed (as queued thunks) against every result
    /// already on file.
    pub(crate) fn push(&self, parser: &crate::parser::Parser, position: Position, continuation: Continuation) {
        let key = (parser.id(), position);

        let already_started = {
            let mut state = self.inner.borrow_mut();
            let entry = state.memo.entry(key).or_default();
            let already_started = entry.started;
            entry.continuations.push(continuation.clone());
            if already_started {
                for (value, remaining) in entry.results.clone() {
                    let continuation = continuation.clone();
                    state
                        .queue
                        .push_back(Box::new(move || continuation(value, remaining)));
                }
            } else {
                entry.started = true;
            }
            already_started
        };

        if already_started {
            log::debug!("trampoline: replaying memoized entry at {position:?}");
            return;
        }

        log::debug!("trampoline: first push for a new memo entry at {position:?}");

        let parser = parser.clone();
        let tramp = self.clone();
        self.push_stack(Box::new(move || {
            let inner_tramp = tramp.clone();
            let inner_continuation: Continuation = Rc::new(move |value: Value, remaining: Position| {
                let to_fire = {
                    let mut state = inner_tramp.inner.borrow_mut();
                    let entry = state
                        .memo
                        .get_mut(&key)
                        .expect("memo entry created before the parser that owns it was invoked");
                    if entry.results.iter().any(|(v, r)| *v == value && *r == remaining) {
                        Vec::new()
                    } else {
                        entry.results.push((value.clone(), remaining));
                        entry.continuations.clone()
                    }
                };
                for continuation in to_fire {
                    let value = value.clone();
                    inner_tramp
                        .push_stack(Box::new(move || continuation(value, remaining)));
                }
            });
            parser.invoke(position, tramp, inner_continuation);
        }));
    }
}
