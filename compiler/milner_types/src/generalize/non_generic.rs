//! The set of variables pinned by enclosing binders.

use std::rc::Rc;

use crate::Idx;

#[derive(Debug)]
struct Node {
    var: Idx,
    rest: NonGeneric,
}

/// Type variables that must not be generalized.
///
/// Lambda parameters and `letrec` placeholders are added on the way into
/// their scope. The set is persistent: [`with`](Self::with) returns an
/// extended copy and leaves `self` untouched, so sibling branches never see
/// each other's additions. Extending is O(1); the tail is shared.
#[derive(Clone, Debug, Default)]
pub struct NonGeneric(Option<Rc<Node>>);

impl NonGeneric {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(None)
    }

    /// A copy of this set with `var` added.
    #[must_use]
    pub fn with(&self, var: Idx) -> Self {
        Self(Some(Rc::new(Node {
            var,
            rest: self.clone(),
        })))
    }

    /// Iterate over members, most recently added first.
    pub fn iter(&self) -> impl Iterator<Item = Idx> + '_ {
        std::iter::successors(self.0.as_deref(), |node| node.rest.0.as_deref())
            .map(|node| node.var)
    }
}
