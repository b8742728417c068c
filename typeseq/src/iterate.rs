//! Compile-time bounded iteration: run a body once for each index of a range, with every index
//! known at compile time.
//!
//! ```
//! use typeseq::prelude::*;
//!
//! struct Widths(Vec<usize>);
//!
//! impl Body for Widths {
//!     fn run<N: Unary>(&mut self) {
//!         self.0.push(N::VALUE * 8);
//!     }
//! }
//!
//! let mut widths = Widths(Vec::new());
//! static_for::<1, 4, _>(&mut widths);
//! assert_eq!(widths.0, [8, 16, 24]);
//! ```

use std::marker::PhantomData;

use crate::unary::{Compare, Number, ToUnary, Unary, UnaryOf, S};

/// The body of a compile-time loop.
pub trait Body {
    /// Run one iteration, for the index `N`.
    fn run<N: Unary>(&mut self);
}

/// Run a body over a range of indices.
pub trait Iterate<B: Body> {
    /// Run `body` once per index, in ascending order.
    fn iterate(body: &mut B);
}

/// The half-open range of unary numbers `I..E`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    Default(bound = "")
)]
pub struct Range<I, E>(PhantomData<fn() -> (I, E)>);

/// The result of comparing the start of a range with its end when another iteration remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Step;

/// The result of comparing the start of a range with its end when the range is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stop;

/// Continue or finish a loop over `I..E`.
pub trait Advance<I, E, B> {
    /// Run the remaining iterations.
    fn advance(body: &mut B);
}

impl<I, E, B> Advance<I, E, B> for Stop {
    fn advance(_: &mut B) {}
}

impl<I: Unary, E: Unary, B: Body> Advance<I, E, B> for Step
where
    Range<S<I>, E>: Iterate<B>,
{
    fn advance(body: &mut B) {
        body.run::<I>();
        <Range<S<I>, E> as Iterate<B>>::iterate(body);
    }
}

type Next<I, E> = <(I, E) as Compare<Step, Stop, Stop>>::Result;

impl<I: Unary, E: Unary, B: Body> Iterate<B> for Range<I, E>
where
    (I, E): Compare<Step, Stop, Stop>,
    Next<I, E>: Advance<I, E, B>,
{
    fn iterate(body: &mut B) {
        <Next<I, E> as Advance<I, E, B>>::advance(body)
    }
}

/// Call `body.run::<I>()` once for each `I` in `BEGIN..END`, in ascending order.
///
/// Nothing runs when `BEGIN >= END`, and there is no early exit.
pub fn static_for<const BEGIN: usize, const END: usize, B>(body: &mut B)
where
    B: Body,
    Number<BEGIN>: ToUnary,
    Number<END>: ToUnary,
    Range<UnaryOf<BEGIN>, UnaryOf<END>>: Iterate<B>,
{
    <Range<UnaryOf<BEGIN>, UnaryOf<END>> as Iterate<B>>::iterate(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Record(Vec<usize>);

    impl Body for Record {
        fn run<N: Unary>(&mut self) {
            self.0.push(N::VALUE);
        }
    }

    #[test]
    fn runs_each_index_in_order() {
        let mut record = Record::default();
        static_for::<0, 5, _>(&mut record);
        assert_eq!(record.0, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_and_reversed_ranges_run_nothing() {
        let mut record = Record::default();
        static_for::<3, 3, _>(&mut record);
        static_for::<7, 2, _>(&mut record);
        assert!(record.0.is_empty());
    }

    #[test]
    fn unary_ranges_iterate_directly() {
        let mut record = Record::default();
        <Range<UnaryOf<10>, UnaryOf<12>> as Iterate<_>>::iterate(&mut record);
        assert_eq!(record.0, [10, 11]);
    }
}
