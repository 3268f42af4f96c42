/*!
Dispatches for external observers.

Dispatches allow optional observation of a procedure as it runs, and communicate the report of a procedure once it ends.

Each dispatch is a small message of some pre-determined type, and is sent by passing a reference to the dispatch to a [Dispatcher].
A dispatcher is set on a procedure with `set_dispatcher`, and if no dispatcher is set the only cost of a dispatch is a check on an optional.

Dispatches come in two types:
- [Deltas](delta), on some step of a procedure.
  - For example, the derivation of a resolvent or the propagation of a literal.
- [Reports](crate::reports::Report), on the result of a procedure.

Deltas are arranged by the procedure from which they are sent.
As the name of a type of delta may conflict with the name of the procedure, deltas are best named relative to the [delta] module.

```rust
# use iengine::config::Config;
# use iengine::db::knowledge::{KnowledgeBase, SentenceKind};
# use iengine::dispatch::{delta, Dispatch};
# use iengine::procedures::forward::ForwardChaining;
# use std::{cell::RefCell, rc::Rc};
let mut kb = KnowledgeBase::from_sentences(["a", "a => b"], SentenceKind::Definite).unwrap();
let goal = kb.goal("b").unwrap();

let inferred = Rc::new(RefCell::new(Vec::default()));
let inferred_clone = inferred.clone();

let mut engine = ForwardChaining::from_kb(&kb, Config::default()).unwrap();
engine.set_dispatcher(Box::new(move |dispatch: &Dispatch| {
    if let Dispatch::Delta(delta::Delta::Chaining(delta::Chaining::Inferred(atom))) = dispatch {
        inferred_clone.borrow_mut().push(*atom);
    }
}));
engine.solve(&goal);

assert_eq!(inferred.borrow().len(), 2);
```
*/

pub mod delta;
pub(crate) mod macros;

use crate::reports::Report;

/// The type of a function to which dispatches are sent.
pub type Dispatcher = dyn FnMut(&Dispatch);

/// A dispatch.
#[derive(Clone, Debug)]
pub enum Dispatch {
    /// Some step of a procedure.
    Delta(delta::Delta),

    /// The report of a procedure, sent once the procedure ends.
    Report(Report),
}
