//! The code generator behind the procedural macros of the `typeseq` crate.
//!
//! Everything here is an ordinary function from parsed input to a [`TokenStream`], so it can be
//! tested without going through a compiler plugin. The `typeseq-macro` crate is a thin shim that
//! parses macro input and calls into this crate.

use {
    lazy_static::lazy_static,
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::FoundCrate,
    quote::quote,
    syn::Ident,
};

pub mod digest;
pub mod ident;
pub mod tuples;
pub mod unary;

mod error;

pub use error::CodegenError;

lazy_static! {
    static ref CRATE_NAME: String = match proc_macro_crate::crate_name("typeseq") {
        Ok(FoundCrate::Name(name)) => name,
        // Inside `typeseq` itself, `extern crate self as typeseq` makes the absolute path work.
        Ok(FoundCrate::Itself) | Err(_) => "typeseq".to_owned(),
    };
}

/// The name of the crate being compiled, which qualifies the names hashed into the identities of
/// the types it declares.
pub fn invoking_crate() -> String {
    std::env::var("CARGO_CRATE_NAME")
        .or_else(|_| std::env::var("CARGO_PKG_NAME"))
        .unwrap_or_default()
}

/// The absolute path through which generated code refers to the `typeseq` crate, accounting for
/// the crate having been renamed in the invoking crate's manifest.
pub fn crate_path() -> TokenStream {
    let name = Ident::new(&**CRATE_NAME, Span::call_site());
    quote!(::#name)
}
