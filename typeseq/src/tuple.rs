//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures, and the value-level operations on tuples: equality across types and slicing.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of tuples, for readability. The traits here convert between the two equivalent
//! representations.
//!
//! At present, tuples up to size 64 are supported, or up to size 128 with the `large-tuples`
//! feature.

use std::any::Any;

use crate::unary::{Number, Sub, ToUnary, Unary, UnaryOf, S, Z};

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Convert a tuple value into its inductive list value.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Convert an inductive list value into its tuple value.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Borrow every element of a tuple at once, producing a tuple of references.
///
/// # Examples
///
/// ```
/// use typeseq::tuple::AsRefs;
///
/// let t = (1u8, 'x', String::from("hello"));
/// let (a, b, c): (&u8, &char, &String) = t.as_refs();
/// assert_eq!((*a, *b, c.as_str()), (1, 'x', "hello"));
/// ```
pub trait AsRefs<'a> {
    /// The tuple of references to each element.
    type Refs: Tuple;

    /// Borrow each element.
    fn as_refs(&'a self) -> Self::Refs;
}

#[cfg(not(feature = "large-tuples"))]
typeseq_macro::impl_tuples!(64);

#[cfg(feature = "large-tuples")]
typeseq_macro::impl_tuples!(128);

/// Compare two tuples for equality, even if their types differ.
///
/// When `A` and `B` are different types the answer is `false`; this includes tuples of different
/// arity. Otherwise the tuples are compared with their `PartialEq` implementation, which compares
/// element by element and so is as deep as each element's own notion of equality.
///
/// # Examples
///
/// ```
/// use typeseq::tuple::tuple_eq;
///
/// assert!(tuple_eq(&(1, vec!['a']), &(1, vec!['a'])));
/// assert!(!tuple_eq(&(1, vec!['a']), &(1, vec!['b'])));
/// assert!(!tuple_eq(&(1u8, 2u8), &(1u8, 2u8, 3u8)));
/// assert!(!tuple_eq(&(1u8,), &(1u16,)));
/// ```
///
/// Telling the two types apart goes through [`Any`], so both tuples must be `'static`. Tuples
/// holding non-`'static` borrows, such as the output of [`slice_ref`] on a local, cannot be
/// compared this way; compare them with `==` when their types are known to match.
///
/// ```compile_fail
/// use typeseq::tuple::{slice_ref, tuple_eq};
///
/// fn first_equal<'a>(a: &'a (u8, char), b: &'a (u8, char)) -> bool {
///     tuple_eq(&slice_ref::<0, 1, _>(a), &slice_ref::<0, 1, _>(b))
/// }
/// ```
pub fn tuple_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Tuple + PartialEq + Any,
    B: Tuple + PartialEq + Any,
{
    match (b as &dyn Any).downcast_ref::<A>() {
        Some(b) => a == b,
        None => false,
    }
}

/// Take the first `N` elements of an inductive list.
pub trait Take<N: Unary> {
    /// The first `N` elements.
    type Taken;

    /// Keep the first `N` elements of this list, dropping the rest.
    fn take(self) -> Self::Taken;
}

impl<L> Take<Z> for L {
    type Taken = ();

    fn take(self) -> Self::Taken {}
}

impl<H, T: Take<N>, N: Unary> Take<S<N>> for (H, T) {
    type Taken = (H, T::Taken);

    fn take(self) -> Self::Taken {
        let (head, tail) = self;
        (head, <T as Take<N>>::take(tail))
    }
}

/// Skip the first `N` elements of an inductive list.
pub trait Skip<N: Unary> {
    /// Everything after the first `N` elements.
    type Remainder;

    /// Drop the first `N` elements of this list, keeping the rest.
    fn skip(self) -> Self::Remainder;
}

impl<L> Skip<Z> for L {
    type Remainder = L;

    fn skip(self) -> Self::Remainder {
        self
    }
}

impl<H, T: Skip<N>, N: Unary> Skip<S<N>> for (H, T) {
    type Remainder = T::Remainder;

    fn skip(self) -> Self::Remainder {
        <T as Skip<N>>::skip(self.1)
    }
}

/// A tuple whose elements in the range `Begin..End` can be sliced out.
///
/// This is implemented exactly when `Begin <= End <= arity`, so slicing out of bounds is a
/// compile error. Use [`slice`] or [`slice_ref`] rather than this trait directly.
pub trait SliceOf<Begin: Unary, End: Unary> {
    /// The tuple of the sliced elements.
    type Output;

    /// Slice the elements out of the tuple.
    fn slice_of(self) -> Self::Output;
}

type Len<Begin, End> = <(End, Begin) as Sub>::Result;
type Rest<T, Begin> = <<T as Tuple>::AsList as Skip<Begin>>::Remainder;
type Sliced<T, Begin, End> = <Rest<T, Begin> as Take<Len<Begin, End>>>::Taken;

impl<T, Begin, End> SliceOf<Begin, End> for T
where
    T: Tuple,
    Begin: Unary,
    End: Unary,
    (End, Begin): Sub,
    T::AsList: Skip<Begin>,
    Rest<T, Begin>: Take<Len<Begin, End>>,
    Sliced<T, Begin, End>: List,
{
    type Output = <Sliced<T, Begin, End> as List>::AsTuple;

    fn slice_of(self) -> Self::Output {
        let rest = <T::AsList as Skip<Begin>>::skip(self.into_list());
        <Rest<T, Begin> as Take<Len<Begin, End>>>::take(rest).into_tuple()
    }
}

/// The tuple of elements `BEGIN..END` of the tuple `T`.
pub type Slice<T, const BEGIN: usize, const END: usize> =
    <T as SliceOf<UnaryOf<BEGIN>, UnaryOf<END>>>::Output;

/// Move the elements `BEGIN..END` out of a tuple into a new tuple.
///
/// # Examples
///
/// ```
/// use typeseq::tuple::slice;
///
/// let t = (1u8, 'b', "c", 4.0f64);
/// assert_eq!(slice::<1, 3, _>(t), ('b', "c"));
/// assert_eq!(slice::<2, 2, _>(t), ());
/// assert_eq!(slice::<0, 4, _>(t), t);
/// ```
///
/// Slicing past the end of the tuple, or with `BEGIN > END`, does not compile:
///
/// ```compile_fail
/// use typeseq::tuple::slice;
///
/// let _ = slice::<2, 5, _>((1, 2, 3, 4));
/// ```
///
/// ```compile_fail
/// use typeseq::tuple::slice;
///
/// let _ = slice::<3, 1, _>((1, 2, 3, 4));
/// ```
pub fn slice<const BEGIN: usize, const END: usize, T>(tuple: T) -> Slice<T, BEGIN, END>
where
    Number<BEGIN>: ToUnary,
    Number<END>: ToUnary,
    T: SliceOf<UnaryOf<BEGIN>, UnaryOf<END>>,
{
    <T as SliceOf<UnaryOf<BEGIN>, UnaryOf<END>>>::slice_of(tuple)
}

/// Borrow the elements `BEGIN..END` of a tuple as a tuple of references.
///
/// # Examples
///
/// ```
/// use typeseq::tuple::slice_ref;
///
/// let t = (String::from("a"), vec![1, 2], 'c');
/// let (v, c) = slice_ref::<1, 3, _>(&t);
/// assert_eq!(v, &vec![1, 2]);
/// assert_eq!(c, &'c');
/// ```
pub fn slice_ref<'a, const BEGIN: usize, const END: usize, T>(
    tuple: &'a T,
) -> Slice<<T as AsRefs<'a>>::Refs, BEGIN, END>
where
    Number<BEGIN>: ToUnary,
    Number<END>: ToUnary,
    T: AsRefs<'a>,
    <T as AsRefs<'a>>::Refs: SliceOf<UnaryOf<BEGIN>, UnaryOf<END>>,
{
    <<T as AsRefs<'a>>::Refs as SliceOf<UnaryOf<BEGIN>, UnaryOf<END>>>::slice_of(tuple.as_refs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<(u8, u16, u32) as Tuple>::AsList, (u8, (u16, (u32, ()))));
    assert_type_eq_all!(<(u8, (u16, (u32, ()))) as List>::AsTuple, (u8, u16, u32));
    assert_type_eq_all!(Slice<(u8, u16, u32, u64), 1, 3>, (u16, u32));
    assert_type_eq_all!(Slice<(u8, u16), 0, 0>, ());

    #[test]
    fn list_roundtrip() {
        let list = (1u8, 'x', "y").into_list();
        assert_eq!(list, (1u8, ('x', ("y", ()))));
        assert_eq!(list.into_tuple(), (1u8, 'x', "y"));
        assert_eq!(().into_list(), ());
    }

    #[test]
    fn take_and_skip() {
        let list = (1, (2, (3, ())));
        assert_eq!(<_ as Take<UnaryOf<2>>>::take(list), (1, (2, ())));
        assert_eq!(<_ as Skip<UnaryOf<2>>>::skip(list), (3, ()));
        assert_eq!(<_ as Skip<UnaryOf<3>>>::skip(list), ());
    }

    #[test]
    fn tuple_eq_is_symmetric() {
        let a = (1u32, String::from("x"));
        let b = (1u32, String::from("x"));
        let c = (1u32, "x");
        assert!(tuple_eq(&a, &b) && tuple_eq(&b, &a));
        assert!(!tuple_eq(&a, &c) && !tuple_eq(&c, &a));
        assert!(tuple_eq(&(), &()));
        assert!(!tuple_eq(&(), &(1,)));
    }

    #[test]
    fn slice_by_reference_borrows() {
        let t = (vec![1], vec![2], vec![3]);
        let (first,) = slice_ref::<0, 1, _>(&t);
        assert!(std::ptr::eq(first, &t.0));
        assert_eq!(slice_ref::<1, 3, _>(&t), (&vec![2], &vec![3]));
    }

    #[test]
    fn tuple_eq_on_static_borrows() {
        static ROW: (u8, char) = (1, 'x');
        static OTHER: (u8, char) = (1, 'y');
        assert!(tuple_eq(&slice_ref::<0, 1, _>(&ROW), &slice_ref::<0, 1, _>(&OTHER)));
        assert!(!tuple_eq(&slice_ref::<1, 2, _>(&ROW), &slice_ref::<1, 2, _>(&OTHER)));
    }
}
