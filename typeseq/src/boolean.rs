//! Type-level booleans, the results of every predicate in this crate.

use crate::Ident;

/// The type-level truth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Ident)]
pub struct True;

/// The type-level falsehood value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Ident)]
pub struct False;

/// A type-level boolean, either [`True`] or [`False`].
///
/// The connectives are generic associated types so that they can be applied to any `Bool` without
/// further bounds; the aliases [`Not`], [`And`], [`Or`] and [`If`] are the usual way to spell them.
///
/// # Examples
///
/// ```
/// use typeseq::boolean::*;
/// use static_assertions::{assert_type_eq_all, const_assert};
///
/// assert_type_eq_all!(And<True, Not<False>>, True);
/// assert_type_eq_all!(Or<False, False>, False);
/// assert_type_eq_all!(If<True, u8, u16>, u8);
/// const_assert!(<Or<False, True> as Bool>::VALUE);
/// ```
pub trait Bool: sealed::Bool + Sized + Copy + Default + Send + Sync + 'static {
    /// The runtime value of this boolean.
    const VALUE: bool;

    /// The negation of this boolean.
    type Not: Bool;

    /// The conjunction of this boolean and `B`.
    type And<B: Bool>: Bool;

    /// The disjunction of this boolean and `B`.
    type Or<B: Bool>: Bool;

    /// `Then` if this boolean is [`True`], otherwise `Else`.
    type If<Then, Else>;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type If<Then, Else> = Else;
}

/// Negate a type-level boolean.
pub type Not<B> = <B as Bool>::Not;

/// The conjunction of two type-level booleans.
pub type And<A, B> = <A as Bool>::And<B>;

/// The disjunction of two type-level booleans.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// Choose between `Then` and `Else` depending on the type-level boolean `C`.
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

mod sealed {
    pub trait Bool {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}
