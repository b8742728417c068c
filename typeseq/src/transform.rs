//! Element-wise type functions over sequences, and substitution of sequence constructors.
//!
//! A type function is a marker type implementing [`TypeFn`] for each argument type it accepts:
//!
//! ```
//! use typeseq::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! struct Boxed;
//!
//! impl<T> TypeFn<T> for Boxed {
//!     type Output = Box<T>;
//! }
//!
//! assert_type_eq_all!(
//!     MapElements<TypeList<(u8, char)>, Boxed>,
//!     TypeList<(Box<u8>, Box<char>)>
//! );
//! ```

use std::marker::PhantomData;

use crate::{
    access::{Back, Front, Last, Select},
    sequence::{Constructor, Elements, Rebuild, Retarget, Sequence},
    unary::{Number, ToConstant, ToUnary, UnaryOf, Z},
};

/// A compile-time function from the type `T` to the type [`Output`](TypeFn::Output).
pub trait TypeFn<T: ?Sized> {
    /// The result of applying this function to `T`.
    type Output;
}

/// A compile-time function from the type `T` and the integer `N` to a type.
pub trait IndexedTypeFn<T: ?Sized, const N: usize> {
    /// The result of applying this function to `T` and `N`.
    type Output;
}

/// Apply the type function `F` to every element of an inductive list.
pub trait MapList<F> {
    /// The list of results, in order.
    type Output;
}

impl<F> MapList<F> for () {
    type Output = ();
}

impl<F, T, Ts> MapList<F> for (T, Ts)
where
    F: TypeFn<T>,
    Ts: MapList<F>,
{
    type Output = (F::Output, Ts::Output);
}

/// Apply the indexed type function `F` with the integer `N` to every element of an inductive list.
pub trait MapListIndexed<F, const N: usize> {
    /// The list of results, in order.
    type Output;
}

impl<F, const N: usize> MapListIndexed<F, N> for () {
    type Output = ();
}

impl<F, T, Ts, const N: usize> MapListIndexed<F, N> for (T, Ts)
where
    F: IndexedTypeFn<T, N>,
    Ts: MapListIndexed<F, N>,
{
    type Output = (F::Output, Ts::Output);
}

/// Apply `F` to every element of `S`, keeping the constructor of `S`.
pub type MapElements<S, F> = Rebuild<S, <Elements<S> as MapList<F>>::Output>;

/// Apply `F` with the auxiliary integer `N` to every element of `S`, keeping the constructor of
/// `S`.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     MapElementsWith<TypeList<(u8, bool)>, ArrayOf, 3>,
///     TypeList<([u8; 3], [bool; 3])>
/// );
/// ```
pub type MapElementsWith<S, F, const N: usize> =
    Rebuild<S, <Elements<S> as MapListIndexed<F, N>>::Output>;

/// Retarget every element of `S`, each of which must itself be a sequence, to the constructor
/// `C`. The constructor of `S` is kept.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// typeseq::sequence! {
///     /// A set of columns.
///     pub struct Columns;
///     /// Builds [`Columns`].
///     pub struct ColumnsCtor;
/// }
///
/// type Tables = TypeList<(TypeList<(u8, char)>, TypeList<()>)>;
/// assert_type_eq_all!(
///     DeepRetarget<Tables, ColumnsCtor>,
///     TypeList<(Columns<(u8, char)>, Columns<()>)>
/// );
/// ```
pub type DeepRetarget<S, C> = MapElements<S, RetargetTo<C>>;

/// The type function `T` ↦ `*const T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pointer;

impl<T: ?Sized> TypeFn<T> for Pointer {
    type Output = *const T;
}

/// The type function `T` ↦ `&'a T`.
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
pub struct Reference<'a>(PhantomData<&'a ()>);

impl<'a, T: ?Sized + 'a> TypeFn<T> for Reference<'a> {
    type Output = &'a T;
}

/// The indexed type function (`T`, `N`) ↦ `[T; N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayOf;

impl<T, const N: usize> IndexedTypeFn<T, N> for ArrayOf {
    type Output = [T; N];
}

/// The type function taking a sequence to the same elements under the constructor `C`.
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
pub struct RetargetTo<C>(PhantomData<fn() -> C>);

impl<C: Constructor, S: Sequence> TypeFn<S> for RetargetTo<C> {
    type Output = Retarget<S, C>;
}

/// The type function taking a non-empty sequence to its first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrontOf;

impl<S: Sequence> TypeFn<S> for FrontOf
where
    S::Elements: Select<Z>,
{
    type Output = Front<S>;
}

/// The type function taking a non-empty sequence to its last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BackOf;

impl<S: Sequence> TypeFn<S> for BackOf
where
    S::Elements: Last,
{
    type Output = Back<S>;
}

/// The type function `Number<N>` ↦ the unary number `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntoUnary;

impl<const N: usize> TypeFn<Number<N>> for IntoUnary
where
    Number<N>: ToUnary,
{
    type Output = UnaryOf<N>;
}

/// The type function taking the unary number `N` to `Number<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntoConstant;

impl<N: ToConstant> TypeFn<N> for IntoConstant {
    type Output = N::AsConstant;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{TypeList, TypeListCtor};
    use static_assertions::assert_type_eq_all;

    type Rows = TypeList<(TypeList<(u8, char)>, TypeList<(bool,)>)>;

    assert_type_eq_all!(MapElements<TypeList<()>, Pointer>, TypeList<()>);
    assert_type_eq_all!(
        MapElements<TypeList<(u8, [char; 2])>, Pointer>,
        TypeList<(*const u8, *const [char; 2])>
    );
    assert_type_eq_all!(
        MapElements<TypeList<(u8,)>, Reference<'static>>,
        TypeList<(&'static u8,)>
    );
    assert_type_eq_all!(MapElements<Rows, FrontOf>, TypeList<(u8, bool)>);
    assert_type_eq_all!(MapElements<Rows, BackOf>, TypeList<(char, bool)>);
    assert_type_eq_all!(DeepRetarget<Rows, TypeListCtor>, Rows);
    assert_type_eq_all!(
        MapElements<TypeList<(Number<0>, Number<2>)>, IntoUnary>,
        TypeList<(Z, UnaryOf<2>)>
    );
    assert_type_eq_all!(
        MapElements<TypeList<(UnaryOf<5>,)>, IntoConstant>,
        TypeList<(Number<5>,)>
    );
    assert_type_eq_all!(MapElementsWith<TypeList<()>, ArrayOf, 8>, TypeList<()>);
}
