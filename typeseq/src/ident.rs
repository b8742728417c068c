//! Compile-time type identity, and equality of types decided by the trait solver.
//!
//! Stable Rust cannot ask whether two arbitrary types are the same and get back an answer of
//! "no". Instead, every type taking part in an equality-based operation (membership, erasure,
//! filtering, map lookup) implements [`Ident`], whose associated [`Id`](Ident::Id) is a tree built
//! only from unary numbers and inductive lists:
//!
//! - the digest of the type's name, sixteen unary nibbles long, followed by
//! - the identities of the type's parameters, in order.
//!
//! Two such trees can always be compared by [`Identity::Eq`], which yields [`True`] or [`False`].
//!
//! Identities are provided here for the primitive types, `str` and `String`, references and raw
//! pointers, `Option`, `Result`, `Vec`, `Box`, `PhantomData`, slices and arrays. Tuples of every
//! supported arity and all sequence types have identities too. Your own types get one from
//! `#[derive(Ident)]`:
//!
//! ```
//! use typeseq::{Ident, ident::type_eq};
//! use static_assertions::const_assert;
//!
//! #[derive(Ident)]
//! struct Position;
//!
//! #[derive(Ident)]
//! struct Wrapper<T>(T);
//!
//! const_assert!(type_eq::<Position, Position>());
//! const_assert!(!type_eq::<Position, Wrapper<Position>>());
//! const_assert!(!type_eq::<Wrapper<u8>, Wrapper<u16>>());
//! ```
//!
//! The hashed name is qualified by the defining crate and by the position and shape of the
//! declaration, and sequence kinds declared with [`sequence!`](crate::sequence!) by crate and
//! position. Same-named types in different modules, or a type of yours called `Z`, are therefore
//! distinct. Two types share an identity only when both are given the same explicit name:
//!
//! ```
//! use typeseq::{Ident, ident::type_eq};
//! use static_assertions::const_assert;
//!
//! mod physics {
//!     #[derive(typeseq::Ident)]
//!     pub struct Position;
//! }
//!
//! #[derive(Ident)]
//! struct Position;
//!
//! #[derive(Ident)]
//! #[ident(name = "Point")]
//! struct Point;
//!
//! #[derive(Ident)]
//! #[ident(name = "Point")]
//! struct Coordinates;
//!
//! const_assert!(!type_eq::<Position, physics::Position>());
//! const_assert!(type_eq::<Point, Coordinates>());
//! ```

use std::marker::PhantomData;

use crate::{
    boolean::{And, Bool, False, True},
    id_digits,
    unary::{Number, ToUnary, UnaryOf, S, Z},
};

/// A type with a compile-time identity.
pub trait Ident {
    /// The identity of this type: a tree of unary digits and inductive lists.
    type Id: Identity;
}

/// A type-level identity tree, which can be compared against any other identity tree.
///
/// Identity trees are made of [`Z`], [`S`], `()` and pairs `(H, T)`. Comparison dispatches twice:
/// once on the left-hand tree through [`Eq`](Identity::Eq), and once on the right-hand tree through
/// the hidden `Eq*` items, so that it never requires bounds beyond `Identity` itself.
pub trait Identity: sealed::Identity + 'static {
    /// [`True`] if `Other` is the same tree as `Self`, otherwise [`False`].
    type Eq<Other: Identity>: Bool;

    #[doc(hidden)]
    type EqZ: Bool;

    #[doc(hidden)]
    type EqS<N: Identity>: Bool;

    #[doc(hidden)]
    type EqNil: Bool;

    #[doc(hidden)]
    type EqCons<H: Identity, T: Identity>: Bool;
}

impl Identity for Z {
    type Eq<Other: Identity> = Other::EqZ;
    type EqZ = True;
    type EqS<N: Identity> = False;
    type EqNil = False;
    type EqCons<H: Identity, T: Identity> = False;
}

impl<M: Identity> Identity for S<M> {
    type Eq<Other: Identity> = Other::EqS<M>;
    type EqZ = False;
    type EqS<N: Identity> = M::Eq<N>;
    type EqNil = False;
    type EqCons<H: Identity, T: Identity> = False;
}

impl Identity for () {
    type Eq<Other: Identity> = Other::EqNil;
    type EqZ = False;
    type EqS<N: Identity> = False;
    type EqNil = True;
    type EqCons<H: Identity, T: Identity> = False;
}

impl<A: Identity, B: Identity> Identity for (A, B) {
    type Eq<Other: Identity> = Other::EqCons<A, B>;
    type EqZ = False;
    type EqS<N: Identity> = False;
    type EqNil = False;
    type EqCons<H: Identity, T: Identity> = And<A::Eq<H>, B::Eq<T>>;
}

/// [`True`] if `A` and `B` have the same identity, otherwise [`False`].
///
/// # Examples
///
/// ```
/// use typeseq::{boolean::*, ident::SameType};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(SameType<Option<&str>, Option<&str>>, True);
/// assert_type_eq_all!(SameType<Option<&str>, Option<String>>, False);
/// assert_type_eq_all!(SameType<[u8; 4], [u8; 5]>, False);
/// ```
pub type SameType<A, B> = <<A as Ident>::Id as Identity>::Eq<<B as Ident>::Id>;

/// Decide at compile time whether `A` and `B` are the same type.
pub const fn type_eq<A: Ident + ?Sized, B: Ident + ?Sized>() -> bool {
    <SameType<A, B> as Bool>::VALUE
}

macro_rules! atomic_identities {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Ident for $ty {
                type Id = (id_digits!($ty), ());
            }
        )*
    };
}

atomic_identities!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, str,
    String,
);

impl<T: Ident + ?Sized> Ident for *const T {
    type Id = (id_digits!("*const"), (T::Id, ()));
}

impl<T: Ident + ?Sized> Ident for *mut T {
    type Id = (id_digits!("*mut"), (T::Id, ()));
}

impl<'a, T: Ident + ?Sized> Ident for &'a T {
    type Id = (id_digits!("&"), (T::Id, ()));
}

impl<'a, T: Ident + ?Sized> Ident for &'a mut T {
    type Id = (id_digits!("&mut"), (T::Id, ()));
}

impl<T: Ident> Ident for [T] {
    type Id = (id_digits!("[]"), (T::Id, ()));
}

impl<T: Ident, const N: usize> Ident for [T; N]
where
    Number<N>: ToUnary,
    UnaryOf<N>: Ident,
{
    type Id = (id_digits!("[;]"), (T::Id, (<UnaryOf<N> as Ident>::Id, ())));
}

impl<T: Ident> Ident for Option<T> {
    type Id = (id_digits!(Option), (T::Id, ()));
}

impl<T: Ident, E: Ident> Ident for Result<T, E> {
    type Id = (id_digits!(Result), (T::Id, (E::Id, ())));
}

impl<T: Ident> Ident for Vec<T> {
    type Id = (id_digits!(Vec), (T::Id, ()));
}

impl<T: Ident + ?Sized> Ident for Box<T> {
    type Id = (id_digits!(Box), (T::Id, ()));
}

impl<T: Ident + ?Sized> Ident for PhantomData<T> {
    type Id = (id_digits!(PhantomData), (T::Id, ()));
}

impl Ident for Z {
    type Id = (id_digits!(Z), ());
}

impl<N: Ident> Ident for S<N> {
    type Id = (id_digits!(S), (N::Id, ()));
}

impl<const N: usize> Ident for Number<N>
where
    Number<N>: ToUnary,
    UnaryOf<N>: Ident,
{
    type Id = (id_digits!(Number), (<UnaryOf<N> as Ident>::Id, ()));
}

mod sealed {
    use super::*;
    pub trait Identity {}
    impl Identity for Z {}
    impl<N: Identity> Identity for S<N> {}
    impl Identity for () {}
    impl<H: Identity, T: Identity> Identity for (H, T) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_type_eq_all, const_assert};

    assert_type_eq_all!(SameType<u8, u8>, True);
    assert_type_eq_all!(SameType<u8, i8>, False);
    assert_type_eq_all!(SameType<&'static str, &'static str>, True);
    assert_type_eq_all!(SameType<&'static str, &'static mut str>, False);
    assert_type_eq_all!(SameType<*const u8, *mut u8>, False);
    assert_type_eq_all!(SameType<Result<u8, char>, Result<char, u8>>, False);
    assert_type_eq_all!(SameType<Vec<Box<str>>, Vec<Box<str>>>, True);
    assert_type_eq_all!(SameType<(u8, char), (u8, char)>, True);
    assert_type_eq_all!(SameType<(u8, char), (u8, char, bool)>, False);
    assert_type_eq_all!(SameType<(), ()>, True);

    const_assert!(type_eq::<[u8; 3], [u8; 3]>());
    const_assert!(!type_eq::<[u8; 3], [u8]>());
    const_assert!(type_eq::<Number<7>, Number<7>>());
    const_assert!(!type_eq::<Number<7>, UnaryOf<7>>());
    const_assert!(!type_eq::<UnaryOf<2>, UnaryOf<3>>());

    #[test]
    fn identity_of_str_is_not_string() {
        assert!(!type_eq::<str, String>());
        assert!(type_eq::<PhantomData<str>, PhantomData<str>>());
    }
}
