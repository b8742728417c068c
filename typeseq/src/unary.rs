//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Unary numbers are the integer-constant descriptors of this crate: they index into sequences,
//! count their elements, and can be added and compared by the trait solver. The const-generic
//! wrapper [`Number`] converts to and from them for every `N <= 256`.

/// The number zero.
///
/// # Examples
///
/// ```
/// use typeseq::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use typeseq::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// # #![recursion_limit = "512"]
/// use typeseq::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<256>>::VALUE, 256);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Compare two unary numbers and branch on their comparison, at the type level.
///
/// # Examples
///
/// ```
/// use typeseq::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// The result of the comparison: `IfLess`, `IfEqual` or `IfGreater`.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// Add two unary numbers at the type level.
///
/// # Examples
///
/// ```
/// use typeseq::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Add>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<5>, UnaryOf<7>) as Add>::Result, UnaryOf<12>);
/// ```
pub trait Add: sealed::Add {
    /// The result of the addition.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// Subtract the second of two unary numbers from the first, at the type level.
///
/// Subtraction is only defined when the result is a natural number, so this doubles as a
/// compile-time check that the second number is no greater than the first.
///
/// # Examples
///
/// ```
/// use typeseq::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<4>, UnaryOf<2>) as Sub>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<3>) as Sub>::Result, UnaryOf<0>);
/// ```
///
/// ```compile_fail
/// # use typeseq::unary::*;
/// type Negative = <(UnaryOf<2>, UnaryOf<3>) as Sub>::Result;
/// let _ = <Negative as Unary>::VALUE;
/// ```
pub trait Sub: sealed::Sub {
    /// The result of the subtraction.
    type Result: Unary;
}

impl<N: Unary> Sub for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Sub for (S<N>, S<M>)
where
    (N, M): Sub,
{
    type Result = <(N, M) as Sub>::Result;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {
    /// The wrapped value.
    const VALUE: usize;
}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {
    const VALUE: usize = N;
}

/// A trait which allows conversion from a wrapper type over a type-level `usize` to a unary
/// type-level number representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to a wrapper over a
/// type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

typeseq_macro::generate_unary_conversion_impls!(256);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}

    pub trait Add {}
    impl<N: Unary, M: Unary> Add for (N, M) {}

    pub trait Sub {}
    impl<N: Unary, M: Unary> Sub for (N, M) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    const_assert_eq!(<UnaryOf<256> as Unary>::VALUE, 256);
    const_assert_eq!(<Number<256> as Constant>::VALUE, 256);
    assert_type_eq_all!(<UnaryOf<256> as ToConstant>::AsConstant, Number<256>);
    assert_type_eq_all!(<(UnaryOf<9>, UnaryOf<4>) as Sub>::Result, UnaryOf<5>);
}
