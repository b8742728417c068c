//! Type sequences and the constructors that build them.
//!
//! A type sequence is a zero-sized marker type implementing [`Sequence`]. It exposes its elements
//! as an inductive list and names the [`Constructor`] it was built with. Every operation that
//! derives one sequence from another rebuilds its result with the input's constructor, unless it
//! explicitly retargets it, so that a user-defined sequence kind survives a chain of operations.
//!
//! The canonical sequence is [`TypeList`], written with a flat tuple of its elements:
//!
//! ```
//! use typeseq::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! type Components = TypeList<(u8, char, bool)>;
//! assert_type_eq_all!(Elements<Components>, (u8, (char, (bool, ()))));
//! ```
//!
//! New sequence kinds are declared with [`sequence!`](crate::sequence!).

use crate::tuple::List;

/// An ordered, fixed-length and immutable sequence of types.
pub trait Sequence {
    /// The elements of the sequence, as an inductive list `(T0, (T1, (..., ())))`.
    type Elements: List;

    /// The constructor which built this sequence, and which rebuilds sequences derived from it.
    type Constructor: Constructor;
}

/// A kind of sequence, able to build a sequence of its kind out of any list of elements.
pub trait Constructor {
    /// The sequence of this kind holding the elements `L`.
    type Build<L: List>: Sequence;
}

/// The inductive list of elements of the sequence `S`.
pub type Elements<S> = <S as Sequence>::Elements;

/// The constructor of the sequence `S`.
pub type ConstructorOf<S> = <S as Sequence>::Constructor;

/// Build a sequence holding the elements `L`, using the same constructor as `S`.
pub type Rebuild<S, L> = <<S as Sequence>::Constructor as Constructor>::Build<L>;

/// The elements of `S`, in the same order, under the constructor `C`.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// typeseq::sequence! {
///     /// Component types stored together.
///     pub struct Archetype;
///     /// Builds [`Archetype`]s.
///     pub struct ArchetypeCtor;
/// }
///
/// assert_type_eq_all!(Retarget<TypeList<(u8, char)>, ArchetypeCtor>, Archetype<(u8, char)>);
/// assert_type_eq_all!(Retarget<Archetype<()>, TypeListCtor>, TypeList<()>);
/// ```
pub type Retarget<S, C> = <C as Constructor>::Build<<S as Sequence>::Elements>;

/// Declare a new kind of sequence, together with its constructor.
///
/// The sequence type takes a single parameter, a flat tuple of its elements. It is zero-sized and
/// is `Copy`, `Default`, `Debug`, `Eq` and `Hash` whatever its elements. Sequences of the new kind
/// have an identity, so they can be elements of sequences compared by the predicate and map
/// operations.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// typeseq::sequence! {
///     /// The variants of a message.
///     pub struct Variants;
///     /// Builds [`Variants`].
///     pub struct VariantsCtor;
/// }
///
/// type Messages = Variants<(u8, String)>;
/// assert_type_eq_all!(Cat<Messages, TypeList<(char,)>>, Variants<(u8, String, char)>);
/// assert_eq!(Messages::default(), Variants::default());
/// ```
#[macro_export]
macro_rules! sequence {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
        $(#[$ctor_attr:meta])*
        $ctor_vis:vis struct $ctor:ident;
    ) => {
        $(#[$attr])*
        #[derive($crate::__private::Derivative)]
        #[derivative(
            Debug(bound = ""),
            Clone(bound = ""),
            Copy(bound = ""),
            Default(bound = ""),
            PartialEq(bound = ""),
            Eq(bound = ""),
            Hash(bound = "")
        )]
        $vis struct $name<T>(::core::marker::PhantomData<fn() -> T>);

        $(#[$ctor_attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $ctor_vis struct $ctor;

        impl<T: $crate::tuple::Tuple> $crate::sequence::Sequence for $name<T> {
            type Elements = <T as $crate::tuple::Tuple>::AsList;
            type Constructor = $ctor;
        }

        impl $crate::sequence::Constructor for $ctor {
            type Build<L: $crate::tuple::List> = $name<<L as $crate::tuple::List>::AsTuple>;
        }

        impl<T: $crate::ident::Ident> $crate::ident::Ident for $name<T> {
            type Id = (
                $crate::id_digits!($name),
                (<T as $crate::ident::Ident>::Id, ()),
            );
        }
    };
}

sequence! {
    /// The canonical type sequence, holding the elements of the tuple `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeseq::prelude::*;
    /// use static_assertions::const_assert_eq;
    ///
    /// type Empty = TypeList<()>;
    /// type Three = TypeList<(f64, char, bool)>;
    ///
    /// const_assert_eq!(size::<Empty>(), 0);
    /// const_assert_eq!(size::<Three>(), 3);
    /// ```
    pub struct TypeList;

    /// The constructor of [`TypeList`]s.
    pub struct TypeListCtor;
}
