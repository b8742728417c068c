#![recursion_limit = "256"]

use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
use typeseq::prelude::*;

type A = TypeList<(u8, char, u8)>;
type B = TypeList<(bool, i64)>;
type C = TypeList<(String,)>;
type Empty = TypeList<()>;

// Concatenation adds lengths, keeps order, and is associative with the empty sequence as unit.
const_assert_eq!(size::<Cat<A, B>>(), size::<A>() + size::<B>());
assert_type_eq_all!(Cat<A, B>, TypeList<(u8, char, u8, bool, i64)>);
assert_type_eq_all!(Cat<Cat<A, B>, C>, Cat<A, Cat<B, C>>);
assert_type_eq_all!(Cat<Empty, A>, A);
assert_type_eq_all!(Cat<A, Empty>, A);

// Positions found by `index_of` select the element searched for, and the first copy wins.
assert_type_eq_all!(Nth<A, { index_of::<A, char>() }>, char);
const_assert_eq!(index_of::<A, u8>(), 0);
const_assert_eq!(index_of::<Cat<B, A>, u8>(), 2);

// Absent elements map to the sentinel, which no valid index can equal.
const_assert_eq!(index_of::<A, bool>(), NOT_FOUND);
const_assert_eq!(index_of::<Empty, bool>(), NOT_FOUND);
const_assert!(NOT_FOUND > size::<Cat<A, B>>());

// Erasure by value removes every copy.
const_assert!(!contains::<EraseValue<A, u8>, u8>());
const_assert_eq!(size::<EraseValue<A, u8>>(), size::<A>() - 2);
assert_type_eq_all!(EraseValue<A, i64>, A);
assert_type_eq_all!(EraseValue<Empty, i64>, Empty);

// Erasure by position removes exactly one.
assert_type_eq_all!(EraseAt<A, 2>, TypeList<(u8, char)>);
assert_type_eq_all!(EraseAt<B, 0>, TypeList<(i64,)>);

// Quantified membership.
const_assert!(!contains_any::<A, B>());
const_assert!(contains_any::<A, TypeList<(i64, char)>>());
const_assert!(!contains_any::<A, Empty>());
const_assert!(contains_all::<A, Empty>());
const_assert!(contains_all::<Cat<A, B>, TypeList<(i64, u8)>>());
const_assert!(!contains_all::<A, TypeList<(u8, i64)>>());

// Element-wise transformations keep the length.
const_assert_eq!(size::<PointerSequence<A>>(), size::<A>());
assert_type_eq_all!(Front<PointerSequence<A>>, *const u8);
assert_type_eq_all!(
    MapElementsWith<B, ArrayOf, 2>,
    TypeList<([bool; 2], [i64; 2])>
);

// Conversions to tuples.
assert_type_eq_all!(AsTuple<A>, (u8, char, u8));
assert_type_eq_all!(AsTuple<Empty>, ());
assert_type_eq_all!(PointerTuple<B>, (*const bool, *const i64));
assert_type_eq_all!(RefTuple<'static, C>, (&'static String,));
const_assert!(same_elements::<Cat<A, B>, (u8, char, u8, bool, i64)>());

// Value sequences.
const_assert_eq!(sum_values::<Values![1, 2, 3]>(), 6);
const_assert_eq!(sum_values::<Values![]>(), 0);
const_assert_eq!(front_value::<Values![9, 1]>(), 9);
assert_type_eq_all!(TypeToValue<ValueToType<Values![5, 0, 5]>>, Values![5, 0, 5]);

// Homogeneous tuples.
assert_type_eq_all!(HomogeneousTuple<char, 4>, (char, char, char, char));
assert_type_eq_all!(HomogeneousTuple<char, 0>, ());

#[test]
fn long_sequences_stay_within_limits() {
    type Bytes = TypeList<HomogeneousTuple<u8, 30>>;
    assert_eq!(size::<Cat<Bytes, Bytes>>(), 60);
    assert_eq!(index_of::<Cat<Bytes, TypeList<(char,)>>, char>(), 30);
    assert_eq!(index_of::<Bytes, char>(), NOT_FOUND);
}
