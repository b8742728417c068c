use static_assertions::{assert_type_eq_all, const_assert_eq};
use typeseq::prelude::*;

type Columns = TypeList<(f64, char, bool, f64)>;

const_assert_eq!(size::<Columns>(), 4);
const_assert_eq!(index_of::<Columns, char>(), 1);
assert_type_eq_all!(Nth<Columns, 1>, char);
assert_type_eq_all!(Back<Columns>, f64);
assert_type_eq_all!(EraseValue<Columns, f64>, TypeList<(char, bool)>);

type Promote = TypeList<(
    TypeList<(i32, char)>,
    TypeList<(f32, f64)>,
    TypeList<(f64, f32)>,
)>;

assert_type_eq_all!(MapLookup<Promote, i32, f32>, char);
assert_type_eq_all!(MapLookup<Promote, char, f32>, f32);
assert_type_eq_all!(
    ApplyMap<Promote, TypeList<(i32, f32, char)>, char>,
    TypeList<(char, f64, char)>
);
