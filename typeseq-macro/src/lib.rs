//! Procedural macros used by and exported from the `typeseq` crate. The generated code lives in
//! `typeseq-codegen`; this crate only parses input and reports errors.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    syn::{parse_macro_input, DeriveInput, LitInt},
    typeseq_codegen::{
        crate_path,
        digest::{located_name, DigestName},
        invoking_crate,
    },
};

/// Derive a compile-time identity for a type, so that it can be compared for equality by the
/// membership, erasure, filtering and map operations of `typeseq`.
///
/// The identity is computed from the name of the type and the identities of its type
/// parameters. The name is qualified by the defining crate and by where and how the type is
/// declared, so distinct types do not share an identity by accident. Types which should share one
/// are given the same name with `#[ident(name = "...")]`.
#[proc_macro_derive(Ident, attributes(ident))]
pub fn derive_ident(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    typeseq_codegen::ident::derive_ident(&input, &crate_path(), &invoking_crate())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// The name digest of an identifier or string literal, as a type-level list of unary nibbles.
/// Identifiers are qualified by the invoking crate and the position they are written at; string
/// literals are hashed as written.
#[doc(hidden)]
#[proc_macro]
pub fn id_digits(input: TokenStream) -> TokenStream {
    let DigestName {
        name,
        span,
        verbatim,
    } = parse_macro_input!(input as DigestName);
    let name = if verbatim {
        name
    } else {
        located_name(&invoking_crate(), &name, span)
    };
    typeseq_codegen::digest::digest(&name, &crate_path()).into()
}

/// Generate the per-arity tuple impls for every arity up to the given bound.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let span = max.span();
    max.base10_parse::<usize>()
        .and_then(|max| {
            typeseq_codegen::tuples::tuple_impls(max, &crate_path()).map_err(|e| e.spanned(span))
        })
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Generate the conversions between `Number<N>` and unary numbers for every `N` up to the given
/// bound.
#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let span = max.span();
    max.base10_parse::<usize>()
        .and_then(|max| {
            typeseq_codegen::unary::conversion_impls(max, &crate_path())
                .map_err(|e| e.spanned(span))
        })
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
