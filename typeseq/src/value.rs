//! Sequences of unsigned integers, mirroring the type-level algebra.
//!
//! A value sequence is a [`Values`] whose elements are [`Number`]s, written with the
//! [`Values!`](crate::Values!) macro. It is isomorphic to a [`TypeList`] of unary numbers through
//! [`ValueToType`] and [`TypeToValue`].
//!
//! ```
//! use typeseq::prelude::*;
//! use typeseq::unary::UnaryOf;
//! use static_assertions::{assert_type_eq_all, const_assert_eq};
//!
//! type Widths = Values![1, 2, 3];
//!
//! const_assert_eq!(size_of_values::<Widths>(), 3);
//! const_assert_eq!(nth_value::<Widths, 1>(), 2);
//! const_assert_eq!(front_value::<Widths>(), 1);
//! const_assert_eq!(back_value::<Widths>(), 3);
//! const_assert_eq!(sum_values::<Widths>(), 6);
//! assert_type_eq_all!(ValueToType<Widths>, TypeList<(UnaryOf<1>, UnaryOf<2>, UnaryOf<3>)>);
//! ```

use crate::{
    access::{size, Back, Front, HasLength, Last, Nth, Select},
    sequence::{Elements, Retarget, Sequence, TypeListCtor},
    transform::{IntoConstant, IntoUnary, MapElements},
    unary::{Constant, Number, ToUnary, UnaryOf, Z},
};

crate::sequence! {
    /// A sequence of integer constants, holding the tuple of [`Number`]s `T`.
    pub struct Values;

    /// The constructor of [`Values`].
    pub struct ValuesCtor;
}

/// Spell the [`Values`] sequence of the given integers.
///
/// ```
/// use typeseq::{unary::Number, value::Values};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(typeseq::Values![4, 0], Values<(Number<4>, Number<0>)>);
/// assert_type_eq_all!(typeseq::Values![], Values<()>);
/// ```
#[macro_export]
macro_rules! Values {
    ($($n:expr),* $(,)?) => {
        $crate::value::Values<($($crate::unary::Number<{ $n }>,)*)>
    };
}

/// An inductive list of [`Number`]s.
pub trait ValueList {
    /// The sum of the numbers, folded from the left, starting from zero.
    const SUM: usize;
}

impl ValueList for () {
    const SUM: usize = 0;
}

impl<const N: usize, Ns: ValueList> ValueList for (Number<N>, Ns) {
    const SUM: usize = N + Ns::SUM;
}

/// The element at index `N` of the value sequence `V`, as a [`Number`].
pub type NthValue<V, const N: usize> = Nth<V, N>;

/// The first element of the value sequence `V`, as a [`Number`].
pub type FrontValue<V> = Front<V>;

/// The last element of the value sequence `V`, as a [`Number`].
pub type BackValue<V> = Back<V>;

/// The sequence of unary numbers `S` as a value sequence.
pub type TypeToValue<S> = Retarget<MapElements<S, IntoConstant>, ValuesCtor>;

/// The value sequence `V` as a [`TypeList`](crate::sequence::TypeList) of unary numbers.
pub type ValueToType<V> = Retarget<MapElements<V, IntoUnary>, TypeListCtor>;

/// Apply the type function `F` to the unary form of every value of `V`, collecting the results in
/// a [`TypeList`](crate::sequence::TypeList).
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::{UnaryOf, S};
/// use static_assertions::assert_type_eq_all;
///
/// struct Successor;
///
/// impl<N: Unary> TypeFn<N> for Successor {
///     type Output = S<N>;
/// }
///
/// assert_type_eq_all!(
///     ApplyValueFn<Successor, Values![7, 9]>,
///     TypeList<(UnaryOf<8>, UnaryOf<10>)>
/// );
/// ```
pub type ApplyValueFn<F, V> = MapElements<ValueToType<V>, F>;

/// The number of values in `V`.
pub const fn size_of_values<V>() -> usize
where
    V: Sequence,
    V::Elements: HasLength,
{
    size::<V>()
}

/// The value at index `N` of `V`.
pub const fn nth_value<V, const N: usize>() -> usize
where
    V: Sequence,
    Number<N>: ToUnary,
    V::Elements: Select<UnaryOf<N>>,
    NthValue<V, N>: Constant,
{
    <NthValue<V, N> as Constant>::VALUE
}

/// The first value of `V`.
pub const fn front_value<V>() -> usize
where
    V: Sequence,
    V::Elements: Select<Z>,
    FrontValue<V>: Constant,
{
    <FrontValue<V> as Constant>::VALUE
}

/// The last value of `V`.
pub const fn back_value<V>() -> usize
where
    V: Sequence,
    V::Elements: Last,
    BackValue<V>: Constant,
{
    <BackValue<V> as Constant>::VALUE
}

/// The sum of the values of `V`, zero if `V` is empty.
pub const fn sum_values<V>() -> usize
where
    V: Sequence,
    V::Elements: ValueList,
{
    <Elements<V> as ValueList>::SUM
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sequence::TypeList, Values};
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    type Empty = Values![];
    type Sizes = Values![8, 0, 16, 0];
    type Digits = TypeList<(UnaryOf<3>, Z, UnaryOf<1>)>;

    const_assert_eq!(sum_values::<Empty>(), 0);
    const_assert_eq!(size_of_values::<Empty>(), 0);
    const_assert_eq!(sum_values::<Sizes>(), 24);
    const_assert_eq!(nth_value::<Sizes, 2>(), 16);
    const_assert_eq!(back_value::<Sizes>(), 0);

    assert_type_eq_all!(FrontValue<Sizes>, Number<8>);
    assert_type_eq_all!(NthValue<Sizes, 3>, Number<0>);
    assert_type_eq_all!(TypeToValue<Digits>, Values![3, 0, 1]);
    assert_type_eq_all!(ValueToType<TypeToValue<Digits>>, Digits);
    assert_type_eq_all!(TypeToValue<ValueToType<Sizes>>, Sizes);
    assert_type_eq_all!(ValueToType<Empty>, TypeList<()>);
}
