use static_assertions::const_assert;
use typeseq::{ident::type_eq, Ident};

#[derive(Ident)]
struct Wrapper<T>(T);

#[derive(Ident)]
#[allow(dead_code)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

const_assert!(type_eq::<Wrapper<u8>, Wrapper<u8>>());
const_assert!(!type_eq::<Wrapper<u8>, Wrapper<u16>>());
const_assert!(!type_eq::<Wrapper<u8>, u8>());
const_assert!(type_eq::<Wrapper<Wrapper<char>>, Wrapper<Wrapper<char>>>());
const_assert!(!type_eq::<Either<u8, char>, Either<char, u8>>());
const_assert!(!type_eq::<Wrapper<Either<u8, u8>>, Either<Wrapper<u8>, u8>>());
