use {proc_macro2::Span, thiserror::Error};

/// Everything that can go wrong while generating code for the `typeseq` macros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A generator was asked for more impls than it is willing to produce.
    #[error("cannot generate impls up to {requested}; at most {limit} are supported")]
    LimitExceeded {
        /// The requested bound.
        requested: usize,
        /// The largest accepted bound.
        limit: usize,
    },
    /// `#[derive(Ident)]` was used on a type with a const generic parameter.
    #[error("const generic parameter `{0}` cannot take part in a type identity")]
    ConstGeneric(String),
    /// An `#[ident(...)]` attribute did not have the form `#[ident(name = "...")]`.
    #[error("malformed attribute, expected `#[ident(name = \"...\")]`")]
    MalformedAttribute,
    /// More than one `#[ident(name = ...)]` was given for the same type.
    #[error("the identity name is given more than once")]
    DuplicateName,
    /// `#[ident(name = "")]`.
    #[error("the name given to `#[ident(name = ...)]` must not be empty")]
    EmptyName,
}

impl CodegenError {
    /// Attach a span to this error, producing something that can be emitted as a compile error.
    pub fn spanned(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}
