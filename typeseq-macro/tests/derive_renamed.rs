#![allow(dead_code)]

use static_assertions::const_assert;
use typeseq::{ident::type_eq, prelude::*};

mod physics {
    #[derive(typeseq::Ident)]
    pub struct Position;

    #[derive(typeseq::Ident)]
    #[ident(name = "Position")]
    pub struct Shared;
}

mod render {
    #[derive(typeseq::Ident)]
    pub struct Position;
}

mod layout {
    #[derive(typeseq::Ident)]
    #[ident(name = "layout::Position")]
    pub struct Position;
}

#[derive(Ident)]
#[ident(name = "Position")]
struct Location;

#[derive(Ident)]
struct Z;

// Same-named types in different modules are distinct without any renaming.
const_assert!(!type_eq::<physics::Position, render::Position>());
const_assert!(!type_eq::<physics::Position, layout::Position>());

// Sharing an identity takes the same explicit name on both sides.
const_assert!(type_eq::<physics::Shared, Location>());
const_assert!(!type_eq::<physics::Position, Location>());

// A user type named after a built-in one is not mistaken for it.
const_assert!(!type_eq::<Z, typeseq::unary::Z>());
const_assert!(type_eq::<typeseq::unary::Z, typeseq::unary::Z>());

const_assert!(contains::<TypeList<(physics::Shared,)>, Location>());
const_assert!(!contains::<TypeList<(physics::Position,)>, render::Position>());
const_assert!(!contains::<TypeList<(typeseq::unary::Z, u8)>, Z>());
const_assert!(index_of::<TypeList<(Z, typeseq::unary::Z)>, typeseq::unary::Z>() == 1);
