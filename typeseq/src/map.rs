//! Associative lookup in sequences of key/value pairs.
//!
//! A map is a sequence whose every element is a two-element sequence, its key followed by its
//! value. Keys need not be unique: a lookup scans the pairs in order and the leftmost match wins.
//! A lookup that finds nothing yields the default type given by the caller.
//!
//! ```
//! use typeseq::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! type Promote = TypeList<(
//!     TypeList<(i32, char)>,
//!     TypeList<(f32, f64)>,
//!     TypeList<(f64, f32)>,
//! )>;
//!
//! assert_type_eq_all!(MapLookup<Promote, i32, f32>, char);
//! assert_type_eq_all!(MapLookup<Promote, char, f32>, f32);
//! assert_type_eq_all!(
//!     ApplyMap<Promote, TypeList<(i32, f32, char)>, char>,
//!     TypeList<(char, f64, char)>
//! );
//! ```
//!
//! An element which is not a pair is a compile error:
//!
//! ```compile_fail
//! use typeseq::prelude::*;
//!
//! type Broken = TypeList<(TypeList<(i32, char)>, TypeList<(f32,)>)>;
//! let _: MapLookup<Broken, i32, ()> = 'x';
//! ```

use crate::{
    boolean::If,
    ident::{Ident, SameType},
    sequence::{Elements, Rebuild, Sequence},
};

/// An inductive list of exactly two elements, a key and a value.
pub trait Entry {
    /// The first element.
    type Key: Ident;
    /// The second element.
    type Value;
}

impl<K: Ident, V> Entry for (K, (V, ())) {
    type Key = K;
    type Value = V;
}

/// Find the value of the first pair with the key `K` in an inductive list of pair sequences, or
/// else `D`.
pub trait Lookup<K: Ident + ?Sized, D> {
    /// The value found, or `D`.
    type Output;
}

impl<K: Ident + ?Sized, D> Lookup<K, D> for () {
    type Output = D;
}

impl<P, Ps, K, D> Lookup<K, D> for (P, Ps)
where
    P: Sequence,
    P::Elements: Entry,
    Ps: Lookup<K, D>,
    K: Ident + ?Sized,
{
    type Output = If<
        SameType<<P::Elements as Entry>::Key, K>,
        <P::Elements as Entry>::Value,
        <Ps as Lookup<K, D>>::Output,
    >;
}

/// Look up every key of an inductive list in the inductive list of pairs `M`, with default `D`.
pub trait LookupEach<M, D> {
    /// The values found, one per key, in order.
    type Output;
}

impl<M, D> LookupEach<M, D> for () {
    type Output = ();
}

impl<K, Ks, M, D> LookupEach<M, D> for (K, Ks)
where
    K: Ident,
    M: Lookup<K, D>,
    Ks: LookupEach<M, D>,
{
    type Output = (<M as Lookup<K, D>>::Output, <Ks as LookupEach<M, D>>::Output);
}

/// The value of the first pair of `M` whose key is `K`, or `D` if there is none.
pub type MapLookup<M, K, D> = <Elements<M> as Lookup<K, D>>::Output;

/// The result of [`MapLookup`] in `M` for every element of `Keys`, under the constructor of `Keys`.
pub type ApplyMap<M, Keys, D> = Rebuild<Keys, <Elements<Keys> as LookupEach<Elements<M>, D>>::Output>;
