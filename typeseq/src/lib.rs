/*!
![license: MIT](https://img.shields.io/github/license/boltlabs-inc/typeseq)
[![crates.io](https://img.shields.io/crates/v/typeseq)](https://crates.io/crates/typeseq)
[![docs.rs documentation](https://docs.rs/typeseq/badge.svg)](https://docs.rs/typeseq)

> **typeseq (crate):** A compile-time algebra of heterogeneous type sequences.

Generic frameworks often describe their data declaratively, as lists of types: the components of
an entity archetype, the variants of a message, the columns of a table. From such a list they
need to *derive* other types: the tuple of references handed to a system, the tagged union of
all messages, the subset of archetypes that contain a given component.

This crate provides a catalogue of operations over ordered, heterogeneous sequences of types,
evaluated entirely by the trait solver. Sequences are zero-sized marker types with no runtime
representation, and every operation is a type alias or a `const fn`:

- **access**: [`size`], [`Nth`], [`Front`], [`Back`], [`index_of`];
- **combination and conversion**: [`Cat`], [`PointerSequence`], [`Union`], [`AsTuple`],
  [`RefTuple`], [`PointerTuple`];
- **transformation**: [`MapElements`], [`MapElementsWith`], [`Retarget`], [`DeepRetarget`];
- **predicates and filters**: [`contains`], [`contains_any`], [`contains_all`], [`EraseValue`],
  [`EraseAt`], [`FilterAny`], [`FilterAll`], [`FilterHas`], [`SameElements`];
- **associative lookup**: [`MapLookup`], [`ApplyMap`];
- **value sequences**: [`Values!`], [`sum_values`], [`nth_value`], [`TypeToValue`],
  [`ValueToType`], [`ApplyValueFn`];
- **reduction, iteration and tuples**: [`Sum`], [`static_for`], [`HomogeneousTuple`],
  [`tuple_eq`], [`slice`], [`slice_ref`].

Contract violations, such as indexing past the end of a sequence or taking the front of an empty
one, are unsatisfied trait bounds: they are reported by the compiler, and there is no runtime
failure path anywhere in this crate.

## What now?

- If you are **new to type-level programming** you might start with the **[tutorial-style tour
  of the crate]**.
- Otherwise, the [`prelude`] exports everything you need: `use typeseq::prelude::*;`.
- Elements compared by the predicate and map operations must have a compile-time identity; see
  the [`ident`] module and [`derive@Ident`].
- To declare your own kind of sequence, use [`sequence!`].

## Quick reference

| Operation | Type-level form | Value-level form |
| :-------- | :-------------- | :--------------- |
| number of elements | [`Length<S>`](access::Length) | [`size::<S>()`](access::size) |
| element at index `N` | [`Nth<S, N>`](access::Nth) | |
| first / last element | [`Front<S>`](access::Front) / [`Back<S>`](access::Back) | |
| position of `T` | | [`index_of::<S, T>()`](access::index_of), or [`NOT_FOUND`] |
| concatenation | [`Cat<A, B>`](combine::Cat) | |
| membership | [`Contains<S, T>`](predicate::Contains) | [`contains::<S, T>()`](predicate::contains) |
| erasure | [`EraseValue<S, T>`](predicate::EraseValue), [`EraseAt<S, N>`](predicate::EraseAt) | |
| lookup | [`MapLookup<M, K, D>`](map::MapLookup) | |
| element-wise function | [`MapElements<S, F>`](transform::MapElements) | |
| sum | [`Sum<S>`](reduce::Sum) | [`sum::<S>()`](reduce::sum), [`sum_values::<V>()`](value::sum_values) |
| iteration | [`Range<I, E>`](iterate::Range) | [`static_for::<B, E, _>(&mut body)`](iterate::static_for) |

[tutorial-style tour of the crate]: tutorial
[`size`]: access::size
[`Nth`]: access::Nth
[`Front`]: access::Front
[`Back`]: access::Back
[`index_of`]: access::index_of
[`NOT_FOUND`]: access::NOT_FOUND
[`Cat`]: combine::Cat
[`PointerSequence`]: combine::PointerSequence
[`Union`]: combine::Union
[`AsTuple`]: combine::AsTuple
[`RefTuple`]: combine::RefTuple
[`PointerTuple`]: combine::PointerTuple
[`MapElements`]: transform::MapElements
[`MapElementsWith`]: transform::MapElementsWith
[`Retarget`]: sequence::Retarget
[`DeepRetarget`]: transform::DeepRetarget
[`contains`]: predicate::contains
[`contains_any`]: predicate::contains_any
[`contains_all`]: predicate::contains_all
[`EraseValue`]: predicate::EraseValue
[`EraseAt`]: predicate::EraseAt
[`FilterAny`]: predicate::FilterAny
[`FilterAll`]: predicate::FilterAll
[`FilterHas`]: predicate::FilterHas
[`SameElements`]: predicate::SameElements
[`MapLookup`]: map::MapLookup
[`ApplyMap`]: map::ApplyMap
[`Values!`]: crate::Values!
[`sum_values`]: value::sum_values
[`nth_value`]: value::nth_value
[`TypeToValue`]: value::TypeToValue
[`ValueToType`]: value::ValueToType
[`ApplyValueFn`]: value::ApplyValueFn
[`Sum`]: reduce::Sum
[`sum`]: reduce::sum
[`HomogeneousTuple`]: reduce::HomogeneousTuple
[`static_for`]: iterate::static_for
[`tuple_eq`]: tuple::tuple_eq
[`slice`]: tuple::slice
[`slice_ref`]: tuple::slice_ref
[`sequence!`]: crate::sequence!
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate self as typeseq;

#[macro_use]
extern crate derivative;

pub mod access;
pub mod boolean;
pub mod combine;
pub mod ident;
pub mod iterate;
pub mod map;
pub mod predicate;
pub mod reduce;
pub mod sequence;
pub mod transform;
pub mod tuple;
pub mod tutorial;
pub mod union;
pub mod unary;
pub mod value;

pub use ident::Ident;
pub use typeseq_macro::Ident;

#[doc(hidden)]
pub use typeseq_macro::id_digits;

/// The prelude module for quickly getting started with typeseq.
///
/// This module is designed to be imported as `use typeseq::prelude::*;`, which brings into scope
/// every sequence operation along with the traits needed to write your own type functions.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::access::{index_of, size, Back, Front, Length, Nth, NOT_FOUND};
    #[doc(no_inline)]
    pub use crate::boolean::{Bool, False, True};
    #[doc(no_inline)]
    pub use crate::combine::{AsTuple, Cat, PointerSequence, PointerTuple, RefTuple, Union};
    #[doc(no_inline)]
    pub use crate::iterate::{static_for, Body};
    #[doc(no_inline)]
    pub use crate::map::{ApplyMap, MapLookup};
    #[doc(no_inline)]
    pub use crate::predicate::{
        contains, contains_all, contains_any, same_elements, Contains, ContainsAll, ContainsAny,
        EraseAt, EraseValue, FilterAll, FilterAny, FilterHas, SameElements,
    };
    #[doc(no_inline)]
    pub use crate::reduce::{homogeneous, sum, HomogeneousTuple, Sum};
    #[doc(no_inline)]
    pub use crate::sequence::{
        Constructor, Elements, Rebuild, Retarget, Sequence, TypeList, TypeListCtor,
    };
    #[doc(no_inline)]
    pub use crate::transform::{
        ArrayOf, BackOf, DeepRetarget, FrontOf, IndexedTypeFn, IntoConstant, IntoUnary,
        MapElements, MapElementsWith, Pointer, Reference, RetargetTo, TypeFn,
    };
    #[doc(no_inline)]
    pub use crate::tuple::{slice, slice_ref, tuple_eq, AsRefs, List, Tuple};
    #[doc(no_inline)]
    pub use crate::unary::Unary;
    #[doc(no_inline)]
    pub use crate::union::{Coproduct, Void};
    #[doc(no_inline)]
    pub use crate::value::{
        back_value, front_value, nth_value, size_of_values, sum_values, ApplyValueFn, BackValue,
        FrontValue, NthValue, TypeToValue, ValueToType, Values, ValuesCtor,
    };
    #[doc(no_inline)]
    pub use crate::{Ident, Values};
}

#[doc(hidden)]
pub mod __private {
    pub use derivative::Derivative;
}
