/*! The introductory tutorial for typeseq (nothing is exported from this module).

# Getting started with typeseq

Everything in this crate happens at compile time. The values you will meet are almost all
zero-sized marker types, and the "functions" are type aliases which the trait solver evaluates
for you. When something is wrong, such as asking for the fifth element of a three-element
sequence, the program simply does not compile.

Let's write our first sequence:

```
use typeseq::prelude::*;

type Components = TypeList<(u32, f64, char)>;
```

A [`TypeList`](crate::sequence::TypeList) holds its elements as a flat tuple. Every sequence
knows how to present those elements as an inductive list, `(u32, (f64, (char, ())))`, and that
inductive form is what the operations of the crate work on:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
# type Components = TypeList<(u32, f64, char)>;
assert_type_eq_all!(Elements<Components>, (u32, (f64, (char, ()))));
```

(Here and elsewhere in this tutorial, we use the
[`assert_type_eq_all!`](static_assertions::assert_type_eq_all) and
[`const_assert!`](static_assertions::const_assert) macros from the [`static_assertions`] crate to
check what the compiler concludes.)

## Looking inside

The basic accessors come in two flavors: type aliases, which produce types, and `const fn`s,
which produce numbers usable in constant contexts.

```
# use typeseq::prelude::*;
use static_assertions::{assert_type_eq_all, const_assert_eq};

type Components = TypeList<(u32, f64, char)>;

const_assert_eq!(size::<Components>(), 3);
assert_type_eq_all!(Nth<Components, 1>, f64);
assert_type_eq_all!(Front<Components>, u32);
assert_type_eq_all!(Back<Components>, char);
const_assert_eq!(index_of::<Components, char>(), 2);
const_assert_eq!(index_of::<Components, bool>(), NOT_FOUND);
```

Asking for an element which isn't there is a compile error, not a panic:

```compile_fail
# use typeseq::prelude::*;
type Components = TypeList<(u32, f64, char)>;
let _: Nth<Components, 3> = ();
```

## Comparing types

You may have noticed that [`index_of`](crate::access::index_of) compared `char` against each
element in turn, and answered "no" for all but one. Stable Rust has no built-in way to conclude
that two types are *different*, so every type compared this way carries an
[`Ident`](crate::Ident)ity. The primitive types and most of the standard library's generic
containers already have one, and your own types can derive it:

```
use typeseq::prelude::*;
use static_assertions::const_assert;

#[derive(Ident)]
struct Position(f32, f32);

#[derive(Ident)]
struct Velocity(f32, f32);

type Moving = TypeList<(Position, Velocity)>;

const_assert!(contains::<Moving, Velocity>());
const_assert!(!contains::<Moving, Option<Position>>());
```

Every comparison yields a type-level boolean, [`True`](crate::boolean::True) or
[`False`](crate::boolean::False), which you can combine and branch on with the aliases in the
[`boolean`](crate::boolean) module. The `const fn`s simply read the boolean's value.

## Building new sequences from old

Sequences can be concatenated, erased from, and mapped over. Each operation keeps the kind of
sequence it was given:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
type Head = TypeList<(u8, u16)>;
type Tail = TypeList<(u32,)>;

assert_type_eq_all!(Cat<Head, Tail>, TypeList<(u8, u16, u32)>);
assert_type_eq_all!(EraseValue<Cat<Head, Head>, u8>, TypeList<(u16, u16)>);
assert_type_eq_all!(EraseAt<Head, 1>, TypeList<(u8,)>);
assert_type_eq_all!(PointerSequence<Tail>, TypeList<(*const u32,)>);
```

To transform each element yourself, write a *type function*: a marker type implementing
[`TypeFn`](crate::transform::TypeFn) for the arguments it accepts.

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
struct Column;

impl<T> TypeFn<T> for Column {
    type Output = Vec<T>;
}

assert_type_eq_all!(
    MapElements<TypeList<(u8, char)>, Column>,
    TypeList<(Vec<u8>, Vec<char>)>
);
```

## Your own kinds of sequence

A `TypeList` is only one kind of sequence. The [`sequence!`](crate::sequence!) macro declares
another, together with the *constructor* that builds it from a list of elements. Because the
operations rebuild their results with the constructor of their input, your kind of sequence is
preserved all the way through:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
typeseq::sequence! {
    /// The component types stored together in one table.
    pub struct Archetype;
    /// Builds [`Archetype`]s.
    pub struct ArchetypeCtor;
}

assert_type_eq_all!(
    Cat<Archetype<(u8,)>, TypeList<(char,)>>,
    Archetype<(u8, char)>
);
assert_type_eq_all!(Retarget<Archetype<(u8, char)>, TypeListCtor>, TypeList<(u8, char)>);
```

## Sequences of sequences

Here is where things become useful. An entity-component system stores its entities in tables,
one per *archetype*, the set of component types an entity has. A query for entities with some
components has to visit every archetype which contains them:

```
use typeseq::prelude::*;
use static_assertions::assert_type_eq_all;

#[derive(Ident)]
struct Position;
#[derive(Ident)]
struct Velocity;
#[derive(Ident)]
struct Health;

typeseq::sequence! {
    /// The component types stored together in one table.
    pub struct Archetype;
    /// Builds [`Archetype`]s.
    pub struct ArchetypeCtor;
}

type World = TypeList<(
    Archetype<(Position,)>,
    Archetype<(Position, Velocity)>,
    Archetype<(Health, Position, Velocity)>,
    Archetype<(Health,)>,
)>;

type Movable = FilterAll<World, TypeList<(Position, Velocity)>>;

assert_type_eq_all!(
    Movable,
    TypeList<(
        Archetype<(Position, Velocity)>,
        Archetype<(Health, Position, Velocity)>,
    )>
);

// Filtering twice by the same query changes nothing.
assert_type_eq_all!(FilterAll<Movable, TypeList<(Position, Velocity)>>, Movable);

// The first component of each matching archetype.
assert_type_eq_all!(MapElements<Movable, FrontOf>, TypeList<(Position, Health)>);
```

[`FilterAny`](crate::predicate::FilterAny) and [`FilterHas`](crate::predicate::FilterHas) work
the same way, keeping the archetypes with at least one, or with a single given, component.

## Looking things up

A sequence of two-element sequences is a compile-time map from each pair's first element to its
second. Lookups take the leftmost match, and fall back on a default you supply:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
type Widen = TypeList<(
    TypeList<(u8, u16)>,
    TypeList<(u16, u32)>,
    TypeList<(u32, u64)>,
)>;

assert_type_eq_all!(MapLookup<Widen, u16, ()>, u32);
assert_type_eq_all!(MapLookup<Widen, u64, ()>, ());
assert_type_eq_all!(ApplyMap<Widen, TypeList<(u8, u32, i8)>, i16>, TypeList<(u16, u64, i16)>);
```

## Numbers

Sequences of numbers are written with the [`Values!`](crate::Values!) macro, and have their own
accessors which produce `usize`s directly:

```
# use typeseq::prelude::*;
use static_assertions::const_assert_eq;

type Strides = Values![4, 8, 16];

const_assert_eq!(sum_values::<Strides>(), 28);
const_assert_eq!(nth_value::<Strides, 2>(), 16);
const_assert_eq!(back_value::<Strides>(), 16);
```

Under the hood, numbers are represented in unary, so the type-level algebra can do arithmetic on
them: [`ValueToType`](crate::value::ValueToType) turns a value sequence into a `TypeList` of
unary numbers, and [`Sum`](crate::reduce::Sum) adds those up.

## Back to runtime

Types computed by the algebra describe real values. The tuple of a sequence's elements, the
tuple of references to them, and the tagged union of them are all a type alias away:

```
# use typeseq::prelude::*;
type Row = TypeList<(u32, String)>;

let row: AsTuple<Row> = (7, String::from("seven"));
let refs: RefTuple<'_, Row> = (&row.0, &row.1);
assert_eq!(*refs.0, 7);

let cell = Union::<Row>::inject(String::from("eight"));
assert_eq!(cell.index(), 1);
assert_eq!(cell.get::<u32, _>(), None);
```

Tuples themselves can be sliced by compile-time bounds, compared across types, and built from
repeated values:

```
# use typeseq::prelude::*;
assert_eq!(slice::<1, 3, _>((1u8, 'b', "c", 4.0f64)), ('b', "c"));
assert!(tuple_eq(&(1u8, 'x'), &(1u8, 'x')));
assert!(!tuple_eq(&(1u8, 'x'), &(1u16, 'x')));
assert_eq!(homogeneous::<3, _>(0u8), (0, 0, 0));
```

Finally, [`static_for`](crate::iterate::static_for) runs a piece of code once for each index in a
range, with each index available as a type:

```
# use typeseq::prelude::*;
struct Offsets(Vec<usize>);

impl Body for Offsets {
    fn run<N: Unary>(&mut self) {
        self.0.push(N::VALUE * 4);
    }
}

let mut offsets = Offsets(Vec::new());
static_for::<0, 3, _>(&mut offsets);
assert_eq!(offsets.0, [0, 4, 8]);
```

That's the tour! For everything else, each module's documentation describes its operations in
detail, and the [`prelude`](crate::prelude) brings them all into scope at once.
*/
