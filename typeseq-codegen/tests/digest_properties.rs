use {
    quickcheck::{QuickCheck, TestResult},
    quote::quote,
    typeseq_codegen::digest::{digest, fingerprint, from_nibbles, nibbles},
};

fn nibbles_roundtrip_property(hash: u64) -> bool {
    from_nibbles(&nibbles(hash)) == hash && nibbles(hash).iter().all(|&n| n < 16)
}

fn distinct_hashes_give_distinct_digests_property(a: String, b: String) -> TestResult {
    if fingerprint(&a) == fingerprint(&b) {
        return TestResult::discard();
    }
    let krate = quote!(::typeseq);
    TestResult::from_bool(digest(&a, &krate).to_string() != digest(&b, &krate).to_string())
}

fn digest_is_deterministic_property(name: String) -> bool {
    let krate = quote!(::typeseq);
    digest(&name, &krate).to_string() == digest(&name, &krate).to_string()
}

#[test]
fn nibbles_roundtrip() {
    QuickCheck::new().quickcheck(nibbles_roundtrip_property as fn(_) -> bool)
}

#[test]
fn distinct_hashes_give_distinct_digests() {
    QuickCheck::new()
        .quickcheck(distinct_hashes_give_distinct_digests_property as fn(_, _) -> TestResult)
}

#[test]
fn digest_is_deterministic() {
    QuickCheck::new().quickcheck(digest_is_deterministic_property as fn(_) -> bool)
}
