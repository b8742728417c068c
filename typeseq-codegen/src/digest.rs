//! Name digests: the part of a type identity derived from the name of the type.
//!
//! A name is hashed with 64-bit FNV-1a and the hash is split into sixteen nibbles, most
//! significant first. Each nibble is emitted as a unary number, so two digests are compared by
//! the trait solver in at most sixteen steps of at most fifteen successor comparisons each.

use {
    proc_macro2::{Span, TokenStream},
    quote::quote,
    syn::{
        ext::IdentExt,
        parse::{Parse, ParseStream},
        Ident, LitStr,
    },
};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The number of nibbles in a digest.
pub const NIBBLES: usize = 16;

/// The 64-bit FNV-1a hash of a name.
pub fn fingerprint(name: &str) -> u64 {
    name.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Split a hash into nibbles, most significant first.
pub fn nibbles(hash: u64) -> [u8; NIBBLES] {
    let mut out = [0; NIBBLES];
    for (i, nibble) in out.iter_mut().enumerate() {
        let shift = 4 * (NIBBLES - 1 - i);
        *nibble = ((hash >> shift) & 0xf) as u8;
    }
    out
}

/// Reassemble a hash from its nibbles.
pub fn from_nibbles(nibbles: &[u8; NIBBLES]) -> u64 {
    nibbles
        .iter()
        .fold(0, |hash, &nibble| (hash << 4) | u64::from(nibble & 0xf))
}

/// The unary type-level number `n`, i.e. `S<S<...Z>>` with `n` successors.
pub fn unary(n: usize, krate: &TokenStream) -> TokenStream {
    let mut ty = quote!(#krate::unary::Z);
    for _ in 0..n {
        ty = quote!(#krate::unary::S<#ty>);
    }
    ty
}

/// Build the inductive list `(A, (B, (..., ())))` out of a sequence of types.
pub fn inductive_list<I>(items: I) -> TokenStream
where
    I: IntoIterator<Item = TokenStream>,
    I::IntoIter: DoubleEndedIterator,
{
    items
        .into_iter()
        .rev()
        .fold(quote!(()), |tail, head| quote!((#head, #tail)))
}

/// The digest of `name` as an inductive list of sixteen unary nibbles.
pub fn digest(name: &str, krate: &TokenStream) -> TokenStream {
    inductive_list(
        nibbles(fingerprint(name))
            .iter()
            .map(|&nibble| unary(nibble as usize, krate))
            .collect::<Vec<_>>(),
    )
}

/// A name qualified by the crate it is declared in.
fn qualified_name(origin: &str, name: &str) -> String {
    format!("{}::{}", origin, name)
}

/// A name qualified by the crate it is declared in and by the line and column it is written at.
/// The position reads as `0:0` where the compiler does not report one.
pub fn located_name(origin: &str, name: &str, span: Span) -> String {
    let start = span.start();
    format!("{}@{}:{}", qualified_name(origin, name), start.line, start.column)
}

/// The input to the `id_digits!` macro: a bare identifier or a string literal.
#[derive(Debug, Clone)]
pub struct DigestName {
    /// The name to be hashed.
    pub name: String,
    /// Where the name was written.
    pub span: Span,
    /// Whether the name was given as a string literal, to be hashed verbatim, rather than as an
    /// identifier, to be qualified by the invoking crate.
    pub verbatim: bool,
}

impl Parse for DigestName {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            let lit = input.parse::<LitStr>()?;
            Ok(DigestName {
                name: lit.value(),
                span: lit.span(),
                verbatim: true,
            })
        } else {
            let ident = input.call(Ident::parse_any)?;
            Ok(DigestName {
                name: ident.unraw().to_string(),
                span: ident.span(),
                verbatim: false,
            })
        }
    }
}
