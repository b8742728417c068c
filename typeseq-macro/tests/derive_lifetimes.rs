use static_assertions::const_assert;
use typeseq::{ident::type_eq, Ident};

#[derive(Ident)]
#[allow(dead_code)]
struct Borrowed<'a, T: ?Sized> {
    inner: &'a T,
}

fn same_identity<'a, 'b>(_: Borrowed<'a, str>, _: Borrowed<'b, str>) -> bool {
    type_eq::<Borrowed<'a, str>, Borrowed<'b, str>>()
}

const_assert!(type_eq::<Borrowed<'static, str>, Borrowed<'static, str>>());
const_assert!(!type_eq::<Borrowed<'static, str>, Borrowed<'static, [u8]>>());

#[test]
fn lifetimes_do_not_take_part() {
    let short = String::from("short");
    assert!(same_identity(
        Borrowed { inner: short.as_str() },
        Borrowed { inner: "static" },
    ));
}
