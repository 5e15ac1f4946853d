//! Ordered predicate/effect branches evaluated against one input.

use std::fmt;
use std::rc::Rc;

use super::Maybe;
use crate::presence::IntoMaybe;

type Predicate<T> = Rc<dyn Fn(&T) -> bool>;
type Effect<T, U> = Rc<dyn Fn(&T) -> Maybe<U>>;

enum Arm<T, U> {
    Effect(Effect<T, U>),
    Nested(Conditions<T, U>),
}

impl<T, U> Clone for Arm<T, U> {
    fn clone(&self) -> Self {
        match self {
            Self::Effect(effect) => Self::Effect(Rc::clone(effect)),
            Self::Nested(nested) => Self::Nested(nested.clone()),
        }
    }
}

struct Branch<T, U> {
    predicate: Predicate<T>,
    arm: Arm<T, U>,
}

impl<T, U> Clone for Branch<T, U> {
    fn clone(&self) -> Self {
        Self {
            predicate: Rc::clone(&self.predicate),
            arm: self.arm.clone(),
        }
    }
}

/// A list of `(predicate, effect)` branches.
///
/// [`evaluate`](Self::evaluate) tests the predicates in insertion order and
/// returns the effect of the first one that holds, normalized through
/// [`Maybe::new`]. An effect may itself be a nested `Conditions`, whose
/// result is returned as-is. If no predicate holds the result is `Nothing`.
///
/// Building is persistent: `when` and `when_nested` return a new value and
/// leave the receiver untouched.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::{Conditions, Maybe};
///
/// let sign = Conditions::new()
///     .when(|n: &i32| *n < 0, |_| "negative")
///     .when(|n: &i32| *n == 0, |_| "zero")
///     .when_nested(
///         |n: &i32| *n > 0,
///         Conditions::new()
///             .when(|n: &i32| *n > 100, |_| "large")
///             .when(|_| true, |_| "positive"),
///     );
///
/// assert_eq!(sign.evaluate(&-3), Maybe::Just("negative"));
/// assert_eq!(sign.evaluate(&0), Maybe::Just("zero"));
/// assert_eq!(sign.evaluate(&500), Maybe::Just("large"));
/// assert_eq!(sign.evaluate(&5), Maybe::Just("positive"));
/// ```
pub struct Conditions<T, U> {
    branches: Vec<Branch<T, U>>,
}

impl<T, U> Conditions<T, U> {
    /// Creates an empty list; evaluating it always yields `Nothing`.
    pub const fn new() -> Self {
        Self {
            branches: Vec::new(),
        }
    }

    /// Returns the number of top-level branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns `true` if there are no branches.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Appends a branch whose effect computes a value from the input.
    #[must_use]
    pub fn when<P, F, R>(&self, predicate: P, effect: F) -> Self
    where
        P: Fn(&T) -> bool + 'static,
        F: Fn(&T) -> R + 'static,
        R: IntoMaybe<Value = U>,
    {
        self.push(Branch {
            predicate: Rc::new(predicate),
            arm: Arm::Effect(Rc::new(move |input: &T| effect(input).into_maybe())),
        })
    }

    /// Appends a branch whose effect is a nested list of conditions.
    #[must_use]
    pub fn when_nested<P>(&self, predicate: P, nested: Self) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.push(Branch {
            predicate: Rc::new(predicate),
            arm: Arm::Nested(nested),
        })
    }

    /// Evaluates the branches against `input`.
    pub fn evaluate(&self, input: &T) -> Maybe<U> {
        self.branches
            .iter()
            .find(|branch| (branch.predicate)(input))
            .map_or(Maybe::Nothing, |branch| match &branch.arm {
                Arm::Effect(effect) => effect(input),
                Arm::Nested(nested) => nested.evaluate(input),
            })
    }

    fn push(&self, branch: Branch<T, U>) -> Self {
        let mut branches = self.branches.clone();
        branches.push(branch);
        Self { branches }
    }
}

impl<T, U> Clone for Conditions<T, U> {
    fn clone(&self) -> Self {
        Self {
            branches: self.branches.clone(),
        }
    }
}

impl<T, U> Default for Conditions<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for Conditions<T, U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Conditions")
            .field("branches", &self.branches.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_conditions_yield_nothing() {
        let conditions: Conditions<i32, i32> = Conditions::new();
        assert_eq!(conditions.evaluate(&1), Maybe::Nothing);
        assert!(conditions.is_empty());
    }

    #[rstest]
    fn first_matching_branch_wins() {
        let conditions = Conditions::new()
            .when(|n: &i32| *n > 0, |n| n * 10)
            .when(|n: &i32| *n > 5, |n| n * 100);
        assert_eq!(conditions.evaluate(&6), Maybe::Just(60));
    }

    #[rstest]
    fn later_predicates_are_not_evaluated_after_a_match() {
        use std::cell::Cell;
        let evaluated = Rc::new(Cell::new(0));
        let counter = Rc::clone(&evaluated);
        let conditions = Conditions::new()
            .when(|_: &i32| true, |_| 1)
            .when(
                move |_: &i32| {
                    counter.set(counter.get() + 1);
                    true
                },
                |_| 2,
            );
        assert_eq!(conditions.evaluate(&0), Maybe::Just(1));
        assert_eq!(evaluated.get(), 0);
    }

    #[rstest]
    fn effect_results_are_normalized() {
        let conditions = Conditions::new().when(|_: &i32| true, |_| None::<i32>);
        assert_eq!(conditions.evaluate(&0), Maybe::Nothing);
    }

    #[rstest]
    fn nested_miss_does_not_fall_through() {
        let conditions = Conditions::new()
            .when_nested(|n: &i32| *n > 0, Conditions::new().when(|n: &i32| *n > 10, |_| "big"))
            .when(|_: &i32| true, |_| "fallback");
        assert_eq!(conditions.evaluate(&3), Maybe::Nothing);
        assert_eq!(conditions.evaluate(&-3), Maybe::Just("fallback"));
    }

    #[rstest]
    fn building_does_not_mutate_receiver() {
        let base = Conditions::new().when(|_: &i32| false, |_| 0);
        let extended = base.when(|_: &i32| true, |_| 1);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(base.evaluate(&0), Maybe::Nothing);
        assert_eq!(extended.evaluate(&0), Maybe::Just(1));
    }
}
