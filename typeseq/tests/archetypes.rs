#![allow(dead_code)]

use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
use typeseq::prelude::*;

#[derive(Ident)]
struct Position(f32, f32);
#[derive(Ident)]
struct Velocity(f32, f32);
#[derive(Ident)]
struct Health(u32);
#[derive(Ident)]
struct Sprite(&'static str);

typeseq::sequence! {
    /// The component types of one storage table.
    pub struct Archetype;
    /// Builds [`Archetype`]s.
    pub struct ArchetypeCtor;
}

type World = TypeList<(
    Archetype<(Position, Sprite)>,
    Archetype<(Position, Velocity)>,
    Archetype<(Health,)>,
    Archetype<(Health, Position, Velocity, Sprite)>,
)>;

type Query = TypeList<(Velocity, Position)>;

type Moving = FilterAll<World, Query>;
type Drawn = FilterHas<World, Sprite>;
type Touched = FilterAny<World, Query>;

assert_type_eq_all!(
    Moving,
    TypeList<(
        Archetype<(Position, Velocity)>,
        Archetype<(Health, Position, Velocity, Sprite)>,
    )>
);
assert_type_eq_all!(
    Drawn,
    TypeList<(
        Archetype<(Position, Sprite)>,
        Archetype<(Health, Position, Velocity, Sprite)>,
    )>
);
assert_type_eq_all!(EraseAt<World, 2>, Touched);

// Filters are idempotent and never reorder.
assert_type_eq_all!(FilterAll<Moving, Query>, Moving);
assert_type_eq_all!(FilterAny<Touched, Query>, Touched);
assert_type_eq_all!(FilterHas<Drawn, Sprite>, Drawn);
assert_type_eq_all!(FilterAll<World, TypeList<()>>, World);
assert_type_eq_all!(FilterAny<World, TypeList<()>>, TypeList<()>);

// Archetypes keep their kind through element operations.
assert_type_eq_all!(
    EraseValue<Nth<World, 3>, Velocity>,
    Archetype<(Health, Position, Sprite)>
);
assert_type_eq_all!(
    DeepRetarget<Moving, TypeListCtor>,
    TypeList<(
        TypeList<(Position, Velocity)>,
        TypeList<(Health, Position, Velocity, Sprite)>,
    )>
);
assert_type_eq_all!(MapElements<Drawn, BackOf>, TypeList<(Sprite, Sprite)>);

const_assert!(contains::<World, Archetype<(Health,)>>());
const_assert!(!contains::<World, TypeList<(Health,)>>());
const_assert_eq!(index_of::<Nth<World, 3>, Velocity>(), 2);

#[test]
fn borrowing_the_components_of_an_entity() {
    let positions = (Position(0.0, 1.0), Velocity(1.0, 0.0));
    let refs: RefTuple<'_, Archetype<(Position, Velocity)>> = (&positions.0, &positions.1);
    assert_eq!((refs.0).1, 1.0);
    assert_eq!((refs.1).0, 1.0);
}
