use typeseq::prelude::*;

#[test]
fn tuple_equality_is_symmetric() {
    let pairs: [((u8, String), (u8, String)); 3] = [
        ((1, "a".into()), (1, "a".into())),
        ((1, "a".into()), (2, "a".into())),
        ((1, "a".into()), (1, "b".into())),
    ];
    for (a, b) in &pairs {
        assert_eq!(tuple_eq(a, b), tuple_eq(b, a));
    }
    assert!(tuple_eq(&pairs[0].0, &pairs[0].1));
    assert!(!tuple_eq(&pairs[1].0, &pairs[1].1));
}

#[test]
fn tuples_of_different_arity_are_unequal() {
    assert!(!tuple_eq(&(1u8,), &(1u8, 1u8)));
    assert!(!tuple_eq(&(1u8, 1u8), &(1u8,)));
    assert!(!tuple_eq(&(), &(0u8,)));
    assert!(tuple_eq(&(), &()));
}

#[test]
fn nested_elements_compare_structurally() {
    let a = (vec![(1u8, 'a')], Some(String::from("x")));
    let b = (vec![(1u8, 'a')], Some(String::from("x")));
    assert!(tuple_eq(&a, &b));
    assert!(!tuple_eq(&a, &(vec![(1u8, 'b')], Some(String::from("x")))));
}

#[test]
fn slicing_by_position() {
    let row = (1u8, 'b', String::from("c"), 4i64);
    assert_eq!(slice_ref::<1, 3, _>(&row), (&'b', &String::from("c")));
    assert_eq!(slice_ref::<2, 2, _>(&row), ());
    assert_eq!(slice::<0, 4, _>(row.clone()), row);
    assert_eq!(slice::<3, 4, _>(row), (4i64,));
}

#[test]
fn homogeneous_tuples() {
    assert_eq!(homogeneous::<4, _>('z'), ('z', 'z', 'z', 'z'));
    assert_eq!(homogeneous::<0, _>('z'), ());
}

#[test]
fn unions_of_sequence_elements() {
    type Message = Union<TypeList<(u16, String, ())>>;

    let messages: Vec<Message> = vec![
        Message::inject(7u16),
        Message::inject(String::from("hi")),
        Message::inject(()),
    ];
    let indices: Vec<usize> = messages.iter().map(|m| m.index()).collect();
    assert_eq!(indices, [0, 1, 2]);

    assert_eq!(messages[0].get::<u16, _>(), Some(&7));
    assert_eq!(messages[1].get::<u16, _>(), None);
    match messages[1].clone().take::<String, _>() {
        Ok(s) => assert_eq!(s, "hi"),
        Err(other) => panic!("expected a string, found variant {}", other.index()),
    }
    assert!(messages[2].clone().take::<String, _>().is_err());
}

struct Layout {
    offsets: Vec<usize>,
}

impl Body for Layout {
    fn run<N: Unary>(&mut self) {
        self.offsets.push(N::VALUE * N::VALUE);
    }
}

#[test]
fn static_for_visits_each_index() {
    let mut layout = Layout { offsets: vec![] };
    static_for::<2, 6, _>(&mut layout);
    assert_eq!(layout.offsets, [4, 9, 16, 25]);

    static_for::<6, 2, _>(&mut layout);
    assert_eq!(layout.offsets.len(), 4);
}
