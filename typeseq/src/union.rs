//! Tagged unions built from sequences: a value of exactly one of the element types.

use crate::{
    unary::{Unary, S, Z},
    Ident,
};

/// Either a value of type `H` ([`Inl`](Coproduct::Inl)) or a value of the union `T`
/// ([`Inr`](Coproduct::Inr)).
///
/// The tagged union of the elements `(T0, T1, T2)` is
/// `Coproduct<T0, Coproduct<T1, Coproduct<T2, Void>>>`.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
///
/// type Event = Union<TypeList<(u32, String, char)>>;
///
/// let event = Event::inject(String::from("resize"));
/// assert_eq!(event.index(), 1);
/// assert_eq!(event.get::<String, _>().map(String::as_str), Some("resize"));
/// assert_eq!(event.get::<char, _>(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Ident)]
pub enum Coproduct<H, T> {
    /// A value of the first type.
    Inl(H),
    /// A value of one of the remaining types.
    Inr(T),
}

/// The empty union, which has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Ident)]
pub enum Void {}

/// Convert an inductive list of types into the tagged union of those types.
pub trait IntoCoproduct {
    /// The tagged union.
    type Coproduct;
}

impl IntoCoproduct for () {
    type Coproduct = Void;
}

impl<T, Ts: IntoCoproduct> IntoCoproduct for (T, Ts) {
    type Coproduct = Coproduct<T, Ts::Coproduct>;
}

/// A union containing the type `X` at the position `I`.
///
/// The position is inferred when `X` occurs exactly once in the union.
pub trait Inject<X, I: Unary>: Sized {
    /// Make a union holding `value`.
    fn inject(value: X) -> Self;

    /// Borrow the value if the union holds an `X` at position `I`.
    fn get(&self) -> Option<&X>;

    /// Take the value if the union holds an `X` at position `I`, otherwise give back the union.
    fn take(self) -> Result<X, Self>;
}

impl<X, T> Inject<X, Z> for Coproduct<X, T> {
    fn inject(value: X) -> Self {
        Coproduct::Inl(value)
    }

    fn get(&self) -> Option<&X> {
        match self {
            Coproduct::Inl(x) => Some(x),
            Coproduct::Inr(_) => None,
        }
    }

    fn take(self) -> Result<X, Self> {
        match self {
            Coproduct::Inl(x) => Ok(x),
            other => Err(other),
        }
    }
}

impl<X, H, T, I: Unary> Inject<X, S<I>> for Coproduct<H, T>
where
    T: Inject<X, I>,
{
    fn inject(value: X) -> Self {
        Coproduct::Inr(<T as Inject<X, I>>::inject(value))
    }

    fn get(&self) -> Option<&X> {
        match self {
            Coproduct::Inl(_) => None,
            Coproduct::Inr(t) => <T as Inject<X, I>>::get(t),
        }
    }

    fn take(self) -> Result<X, Self> {
        match self {
            Coproduct::Inr(t) => <T as Inject<X, I>>::take(t).map_err(Coproduct::Inr),
            other => Err(other),
        }
    }
}

/// The position of the variant currently held by a union.
pub trait Discriminant {
    /// The zero-based position of the held variant.
    fn index(&self) -> usize;
}

impl Discriminant for Void {
    fn index(&self) -> usize {
        match *self {}
    }
}

impl<H, T: Discriminant> Discriminant for Coproduct<H, T> {
    fn index(&self) -> usize {
        match self {
            Coproduct::Inl(_) => 0,
            Coproduct::Inr(t) => t.index() + 1,
        }
    }
}

impl<H, T> Coproduct<H, T> {
    /// Make a union holding `value`.
    pub fn inject<X, I: Unary>(value: X) -> Self
    where
        Self: Inject<X, I>,
    {
        <Self as Inject<X, I>>::inject(value)
    }

    /// Borrow the value if the union holds an `X`.
    pub fn get<X, I: Unary>(&self) -> Option<&X>
    where
        Self: Inject<X, I>,
    {
        <Self as Inject<X, I>>::get(self)
    }

    /// Take the value if the union holds an `X`, otherwise give back the union.
    pub fn take<X, I: Unary>(self) -> Result<X, Self>
    where
        Self: Inject<X, I>,
    {
        <Self as Inject<X, I>>::take(self)
    }

    /// The zero-based position of the held variant.
    pub fn index(&self) -> usize
    where
        T: Discriminant,
    {
        Discriminant::index(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::UnaryOf;

    type Width = Coproduct<u8, Coproduct<u16, Coproduct<u32, Void>>>;

    #[test]
    fn inject_then_get() {
        let n = Width::inject(7u16);
        assert_eq!(n, Coproduct::Inr(Coproduct::Inl(7)));
        assert_eq!(n.get::<u16, _>(), Some(&7));
        assert_eq!(n.get::<u32, _>(), None);
        assert_eq!(n.index(), 1);
    }

    #[test]
    fn take_returns_the_union_on_mismatch() {
        let n = Width::inject(9u32);
        assert_eq!(n.index(), 2);
        let n = n.take::<u8, _>().unwrap_err();
        assert_eq!(n.take::<u32, _>(), Ok(9));
    }

    #[test]
    fn repeated_types_need_an_explicit_position() {
        type Twice = Coproduct<char, Coproduct<char, Void>>;
        let second = <Twice as Inject<char, UnaryOf<1>>>::inject('x');
        assert_eq!(second.index(), 1);
        assert_eq!(<Twice as Inject<char, UnaryOf<0>>>::get(&second), None);
    }
}
