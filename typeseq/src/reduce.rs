//! Folding sequences of numbers, and building tuples of one repeated type.

use crate::{
    sequence::{Elements, Sequence},
    tuple::List,
    unary::{Add, Number, ToUnary, Unary, UnaryOf, S, Z},
};

/// The sum of an inductive list of unary numbers.
pub trait SumList {
    /// The sum, zero for the empty list.
    type Sum: Unary;
}

impl SumList for () {
    type Sum = Z;
}

impl<N: Unary, Ns: SumList> SumList for (N, Ns)
where
    (N, Ns::Sum): Add,
{
    type Sum = <(N, Ns::Sum) as Add>::Result;
}

/// The sum of the sequence of unary numbers `S`.
///
/// # Examples
///
/// ```
/// use typeseq::{prelude::*, unary::UnaryOf};
/// use static_assertions::{assert_type_eq_all, const_assert_eq};
///
/// type Counts = TypeList<(UnaryOf<1>, UnaryOf<2>, UnaryOf<3>)>;
/// assert_type_eq_all!(Sum<Counts>, UnaryOf<6>);
/// const_assert_eq!(sum::<Counts>(), 6);
/// const_assert_eq!(sum::<TypeList<()>>(), 0);
/// ```
pub type Sum<S> = <Elements<S> as SumList>::Sum;

/// The sum of the sequence of unary numbers `S`, as a `usize`.
pub const fn sum<S>() -> usize
where
    S: Sequence,
    S::Elements: SumList,
{
    <Sum<S> as Unary>::VALUE
}

/// The inductive list of `Self` copies of `T`, for a unary number `Self`.
pub trait Replicate<T> {
    /// The list of copies.
    type Output;

    /// Build the list by cloning `value`.
    fn replicate(value: &T) -> Self::Output
    where
        T: Clone;
}

impl<T> Replicate<T> for Z {
    type Output = ();

    fn replicate(_: &T) -> Self::Output
    where
        T: Clone,
    {
    }
}

impl<T, N: Replicate<T>> Replicate<T> for S<N> {
    type Output = (T, N::Output);

    fn replicate(value: &T) -> Self::Output
    where
        T: Clone,
    {
        (value.clone(), N::replicate(value))
    }
}

/// The tuple of exactly `N` elements of type `T`.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(HomogeneousTuple<u8, 0>, ());
/// assert_type_eq_all!(HomogeneousTuple<u8, 1>, (u8,));
/// assert_type_eq_all!(HomogeneousTuple<u8, 4>, (u8, u8, u8, u8));
/// ```
pub type HomogeneousTuple<T, const N: usize> =
    <<UnaryOf<N> as Replicate<T>>::Output as List>::AsTuple;

/// Build the tuple of `N` clones of `value`.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
///
/// assert_eq!(homogeneous::<3, _>('x'), ('x', 'x', 'x'));
/// assert_eq!(homogeneous::<0, _>(String::new()), ());
/// ```
pub fn homogeneous<const N: usize, T>(value: T) -> HomogeneousTuple<T, N>
where
    T: Clone,
    Number<N>: ToUnary,
    UnaryOf<N>: Replicate<T>,
    <UnaryOf<N> as Replicate<T>>::Output: List,
{
    <UnaryOf<N> as Replicate<T>>::replicate(&value).into_tuple()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::TypeList;
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    assert_type_eq_all!(Sum<TypeList<()>>, Z);
    assert_type_eq_all!(Sum<TypeList<(Z, Z)>>, Z);
    assert_type_eq_all!(Sum<TypeList<(UnaryOf<4>, Z, UnaryOf<9>)>>, UnaryOf<13>);
    const_assert_eq!(sum::<TypeList<(UnaryOf<100>, UnaryOf<100>)>>(), 200);

    #[test]
    fn homogeneous_clones_each_element() {
        let tuple: (Vec<u8>, Vec<u8>) = homogeneous::<2, _>(vec![1, 2]);
        assert_eq!(tuple, (vec![1, 2], vec![1, 2]));
    }
}
