//! Membership tests, erasure of elements, and filtering of nested sequences.
//!
//! Predicates produce type-level booleans ([`True`](crate::boolean::True) or
//! [`False`](crate::boolean::False)) and have `const fn` counterparts producing `bool`. Elements
//! are compared by their [`Ident`]ity, so every element involved must implement it.
//!
//! ```
//! use typeseq::prelude::*;
//! use static_assertions::{assert_type_eq_all, const_assert};
//!
//! type Columns = TypeList<(f64, char, bool, f64)>;
//!
//! const_assert!(contains::<Columns, char>());
//! const_assert!(!contains::<Columns, u8>());
//! const_assert!(contains_any::<Columns, TypeList<(u8, bool)>>());
//! const_assert!(!contains_all::<Columns, TypeList<(u8, bool)>>());
//! assert_type_eq_all!(EraseValue<Columns, f64>, TypeList<(char, bool)>);
//! assert_type_eq_all!(EraseAt<Columns, 0>, TypeList<(char, bool, f64)>);
//! ```

use std::marker::PhantomData;

use crate::{
    boolean::{And, Bool, False, If, Or, True},
    ident::{Ident, SameType},
    sequence::{Elements, Rebuild, Sequence},
    transform::TypeFn,
    tuple::Tuple,
    unary::{Unary, UnaryOf, S, Z},
};

/// Whether an inductive list contains `X`.
pub trait Member<X: Ident + ?Sized> {
    /// [`True`] if the list contains `X`.
    type Output: Bool;
}

impl<X: Ident + ?Sized> Member<X> for () {
    type Output = False;
}

impl<T: Ident, Ts: Member<X>, X: Ident + ?Sized> Member<X> for (T, Ts) {
    type Output = Or<SameType<T, X>, Ts::Output>;
}

/// Whether an inductive list contains any element of the inductive list `R`.
pub trait MemberAny<R> {
    /// [`True`] if the list contains at least one element of `R`.
    type Output: Bool;
}

impl<L> MemberAny<()> for L {
    type Output = False;
}

impl<L, R: Ident, Rs> MemberAny<(R, Rs)> for L
where
    L: Member<R> + MemberAny<Rs>,
{
    type Output = Or<<L as Member<R>>::Output, <L as MemberAny<Rs>>::Output>;
}

/// Whether an inductive list contains every element of the inductive list `R`.
pub trait MemberAll<R> {
    /// [`True`] if the list contains all the elements of `R`.
    type Output: Bool;
}

impl<L> MemberAll<()> for L {
    type Output = True;
}

impl<L, R: Ident, Rs> MemberAll<(R, Rs)> for L
where
    L: Member<R> + MemberAll<Rs>,
{
    type Output = And<<L as Member<R>>::Output, <L as MemberAll<Rs>>::Output>;
}

/// Remove every occurrence of `X` from an inductive list.
pub trait Without<X: Ident + ?Sized> {
    /// The list without `X`.
    type Output;
}

impl<X: Ident + ?Sized> Without<X> for () {
    type Output = ();
}

impl<T: Ident, Ts: Without<X>, X: Ident + ?Sized> Without<X> for (T, Ts) {
    type Output = If<SameType<T, X>, Ts::Output, (T, Ts::Output)>;
}

/// Remove the element at index `N` from an inductive list.
///
/// This is not implemented when `N` is past the end of the list.
pub trait RemoveAt<N: Unary> {
    /// The list without its element at index `N`.
    type Output;
}

impl<T, Ts> RemoveAt<Z> for (T, Ts) {
    type Output = Ts;
}

impl<T, Ts: RemoveAt<N>, N: Unary> RemoveAt<S<N>> for (T, Ts) {
    type Output = (T, Ts::Output);
}

/// Keep the elements of an inductive list for which the type function `P` yields [`True`].
pub trait KeepWith<P> {
    /// The kept elements, in order.
    type Output;
}

impl<P> KeepWith<P> for () {
    type Output = ();
}

impl<P, T, Ts> KeepWith<P> for (T, Ts)
where
    P: TypeFn<T>,
    P::Output: Bool,
    Ts: KeepWith<P>,
{
    type Output = If<<P as TypeFn<T>>::Output, (T, Ts::Output), Ts::Output>;
}

/// The predicate on sequences "contains `X`".
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Has<X: ?Sized>(PhantomData<fn() -> PhantomData<X>>);

impl<X: Ident + ?Sized, Seq: Sequence> TypeFn<Seq> for Has<X>
where
    Seq::Elements: Member<X>,
{
    type Output = Contains<Seq, X>;
}

/// The predicate on sequences "contains any element of the sequence `R`".
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct HasAny<R>(PhantomData<fn() -> R>);

impl<R: Sequence, Seq: Sequence> TypeFn<Seq> for HasAny<R>
where
    Seq::Elements: MemberAny<R::Elements>,
{
    type Output = ContainsAny<Seq, R>;
}

/// The predicate on sequences "contains every element of the sequence `R`".
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct HasAll<R>(PhantomData<fn() -> R>);

impl<R: Sequence, Seq: Sequence> TypeFn<Seq> for HasAll<R>
where
    Seq::Elements: MemberAll<R::Elements>,
{
    type Output = ContainsAll<Seq, R>;
}

/// [`True`] if `S` contains `X`.
pub type Contains<S, X> = <Elements<S> as Member<X>>::Output;

/// [`True`] if `S` contains at least one element of `R`; [`False`] when `R` is empty.
pub type ContainsAny<S, R> = <Elements<S> as MemberAny<Elements<R>>>::Output;

/// [`True`] if `S` contains every element of `R`; [`True`] when `R` is empty.
pub type ContainsAll<S, R> = <Elements<S> as MemberAll<Elements<R>>>::Output;

/// `S` with every occurrence of `X` removed.
pub type EraseValue<S, X> = Rebuild<S, <Elements<S> as Without<X>>::Output>;

/// `S` with its element at index `N` removed.
///
/// Erasing past the end is a compile error:
///
/// ```compile_fail
/// use typeseq::prelude::*;
///
/// let _: EraseAt<TypeList<(u8, char)>, 2> = Default::default();
/// ```
pub type EraseAt<S, const N: usize> = Rebuild<S, <Elements<S> as RemoveAt<UnaryOf<N>>>::Output>;

/// The elements of `S` satisfying the predicate `P`, keeping the constructor of `S`.
pub type Filter<S, P> = Rebuild<S, <Elements<S> as KeepWith<P>>::Output>;

/// The nested sequences of `S` that contain at least one element of `R`.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Ident)]
/// struct Position;
/// #[derive(Ident)]
/// struct Velocity;
/// #[derive(Ident)]
/// struct Sprite;
///
/// type Archetypes = TypeList<(
///     TypeList<(Position, Velocity)>,
///     TypeList<(Sprite,)>,
///     TypeList<(Position, Sprite)>,
/// )>;
///
/// assert_type_eq_all!(
///     FilterAny<Archetypes, TypeList<(Velocity, Sprite)>>,
///     Archetypes
/// );
/// assert_type_eq_all!(
///     FilterAll<Archetypes, TypeList<(Position, Sprite)>>,
///     TypeList<(TypeList<(Position, Sprite)>,)>
/// );
/// assert_type_eq_all!(
///     FilterHas<Archetypes, Velocity>,
///     TypeList<(TypeList<(Position, Velocity)>,)>
/// );
/// ```
pub type FilterAny<S, R> = Filter<S, HasAny<R>>;

/// The nested sequences of `S` that contain every element of `R`.
pub type FilterAll<S, R> = Filter<S, HasAll<R>>;

/// The nested sequences of `S` that contain `X`.
pub type FilterHas<S, X> = Filter<S, Has<X>>;

/// [`True`] if `S` has exactly the elements of the flat tuple `T`, in the same order.
pub type SameElements<S, T> = SameType<Elements<S>, <T as Tuple>::AsList>;

/// Whether `S` contains `X`.
pub const fn contains<S, X>() -> bool
where
    S: Sequence,
    S::Elements: Member<X>,
    X: Ident + ?Sized,
{
    <Contains<S, X> as Bool>::VALUE
}

/// Whether `S` contains at least one element of `R`.
pub const fn contains_any<S, R>() -> bool
where
    S: Sequence,
    R: Sequence,
    S::Elements: MemberAny<R::Elements>,
{
    <ContainsAny<S, R> as Bool>::VALUE
}

/// Whether `S` contains every element of `R`.
pub const fn contains_all<S, R>() -> bool
where
    S: Sequence,
    R: Sequence,
    S::Elements: MemberAll<R::Elements>,
{
    <ContainsAll<S, R> as Bool>::VALUE
}

/// Whether `S` has exactly the elements of the flat tuple `T`, in the same order.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::const_assert;
///
/// const_assert!(same_elements::<TypeList<(u8, char)>, (u8, char)>());
/// const_assert!(!same_elements::<TypeList<(u8, char)>, (char, u8)>());
/// const_assert!(!same_elements::<TypeList<(u8, char)>, (u8,)>());
/// ```
pub const fn same_elements<S, T>() -> bool
where
    S: Sequence,
    S::Elements: Ident,
    T: Tuple,
    T::AsList: Ident,
{
    <SameElements<S, T> as Bool>::VALUE
}
