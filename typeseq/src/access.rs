//! Reading elements out of a sequence: its size, the element at an index, the first and last
//! elements, and the index of an element.

use crate::{
    boolean::Bool,
    ident::{Ident, SameType},
    sequence::{Elements, Sequence},
    unary::{Unary, UnaryOf, S, Z},
};

/// The value of [`index_of`] when the element is not present in the sequence.
///
/// No sequence can be long enough for this to be a valid index.
pub const NOT_FOUND: usize = usize::MAX;

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Select the element at the index `N` of a type-level list.
///
/// This is not implemented when `N` is past the end of the list, so indexing out of bounds is a
/// compile error.
pub trait Select<N: Unary> {
    /// The element at index `N`.
    type Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Selected = <Ts as Select<N>>::Selected;
}

/// The last element of a non-empty type-level list.
pub trait Last {
    /// The last element.
    type Last;
}

impl<T> Last for (T, ()) {
    type Last = T;
}

impl<T, U, Us> Last for (T, (U, Us))
where
    (U, Us): Last,
{
    type Last = <(U, Us) as Last>::Last;
}

/// The position of the first occurrence of `X` in a type-level list.
pub trait Position<X: Ident + ?Sized> {
    /// The index of `X`, or [`NOT_FOUND`].
    const INDEX: usize;
}

impl<X: Ident + ?Sized> Position<X> for () {
    const INDEX: usize = NOT_FOUND;
}

impl<T: Ident, Ts: Position<X>, X: Ident + ?Sized> Position<X> for (T, Ts) {
    const INDEX: usize = if <SameType<T, X> as Bool>::VALUE {
        0
    } else if Ts::INDEX == NOT_FOUND {
        NOT_FOUND
    } else {
        Ts::INDEX + 1
    };
}

/// The number of elements of `S`, as a unary number.
pub type Length<S> = <Elements<S> as HasLength>::Length;

/// The element at the zero-based index `N` of `S`.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type Columns = TypeList<(f64, char, bool, f64)>;
/// assert_type_eq_all!(Nth<Columns, 1>, char);
/// assert_type_eq_all!(Nth<Columns, 3>, f64);
/// ```
///
/// Indexing past the end is a compile error:
///
/// ```compile_fail
/// use typeseq::prelude::*;
///
/// let _: Option<Nth<TypeList<(f64, char)>, 2>> = None;
/// ```
pub type Nth<S, const N: usize> = <Elements<S> as Select<UnaryOf<N>>>::Selected;

/// The first element of `S`.
///
/// ```compile_fail
/// use typeseq::prelude::*;
///
/// let _: Option<Front<TypeList<()>>> = None;
/// ```
pub type Front<S> = <Elements<S> as Select<Z>>::Selected;

/// The last element of `S`.
///
/// ```compile_fail
/// use typeseq::prelude::*;
///
/// let _: Option<Back<TypeList<()>>> = None;
/// ```
pub type Back<S> = <Elements<S> as Last>::Last;

/// The number of elements of `S`.
pub const fn size<S>() -> usize
where
    S: Sequence,
    S::Elements: HasLength,
{
    <Length<S> as Unary>::VALUE
}

/// The zero-based index of the first occurrence of `X` in `S`, or [`NOT_FOUND`].
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::const_assert_eq;
///
/// type Columns = TypeList<(f64, char, bool, f64)>;
/// const_assert_eq!(index_of::<Columns, char>(), 1);
/// const_assert_eq!(index_of::<Columns, f64>(), 0);
/// const_assert_eq!(index_of::<Columns, u8>(), NOT_FOUND);
/// ```
pub const fn index_of<S, X>() -> usize
where
    S: Sequence,
    S::Elements: Position<X>,
    X: Ident + ?Sized,
{
    <S::Elements as Position<X>>::INDEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::TypeList;
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    type Empty = TypeList<()>;
    type One = TypeList<(String,)>;
    type Repeats = TypeList<(u8, char, u8, char)>;

    assert_type_eq_all!(Length<Empty>, Z);
    assert_type_eq_all!(Length<Repeats>, UnaryOf<4>);
    assert_type_eq_all!(Front<One>, String);
    assert_type_eq_all!(Back<One>, String);
    assert_type_eq_all!(Back<Repeats>, char);
    assert_type_eq_all!(Nth<Repeats, 2>, u8);

    const_assert_eq!(size::<Empty>(), 0);
    const_assert_eq!(index_of::<Empty, u8>(), NOT_FOUND);
    const_assert_eq!(index_of::<Repeats, char>(), 1);
    const_assert_eq!(index_of::<One, String>(), 0);
    const_assert_eq!(index_of::<One, str>(), NOT_FOUND);
}
