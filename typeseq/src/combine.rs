//! Combining sequences, and converting them to other representations: pointer sequences, tagged
//! unions and tuples.
//!
//! ```
//! use typeseq::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! type Position = TypeList<(f32, f32)>;
//! type Velocity = TypeList<(f64,)>;
//!
//! assert_type_eq_all!(Cat<Position, Velocity>, TypeList<(f32, f32, f64)>);
//! assert_type_eq_all!(PointerSequence<Velocity>, TypeList<(*const f64,)>);
//! assert_type_eq_all!(AsTuple<Position>, (f32, f32));
//! assert_type_eq_all!(RefTuple<'static, Velocity>, (&'static f64,));
//! assert_type_eq_all!(PointerTuple<Position>, (*const f32, *const f32));
//! assert_type_eq_all!(Union<Velocity>, Coproduct<f64, Void>);
//! ```

use crate::{
    sequence::{Elements, Rebuild},
    transform::{MapElements, Pointer},
    tuple::{AsRefs, List},
    union::IntoCoproduct,
};

/// Append the inductive list `Rhs` to the end of an inductive list.
pub trait Append<Rhs> {
    /// The combined list.
    type Output;
}

impl<Rhs> Append<Rhs> for () {
    type Output = Rhs;
}

impl<T, Ts: Append<Rhs>, Rhs> Append<Rhs> for (T, Ts) {
    type Output = (T, Ts::Output);
}

/// The elements of `A` followed by the elements of `B`, under the constructor of `A`.
pub type Cat<A, B> = Rebuild<A, <Elements<A> as Append<Elements<B>>>::Output>;

/// Every element `T` of `S` replaced by `*const T`, keeping the constructor of `S`.
pub type PointerSequence<S> = MapElements<S, Pointer>;

/// The tagged union of the elements of `S`; see [`Coproduct`](crate::union::Coproduct).
pub type Union<S> = <Elements<S> as IntoCoproduct>::Coproduct;

/// The flat tuple of the elements of `S`.
pub type AsTuple<S> = <Elements<S> as List>::AsTuple;

/// The flat tuple of references to each element of `S`.
pub type RefTuple<'a, S> = <AsTuple<S> as AsRefs<'a>>::Refs;

/// The flat tuple of `*const` pointers to each element of `S`.
pub type PointerTuple<S> = AsTuple<PointerSequence<S>>;
