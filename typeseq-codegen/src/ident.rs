//! `#[derive(Ident)]`: give a user-defined type a compile-time identity.
//!
//! The identity of a type is the digest of its name followed by the identities of its type
//! parameters, so `Wrapper<u8>` and `Wrapper<u16>` are different types as far as the algebra is
//! concerned, while lifetimes are ignored.
//!
//! Unless a name is given explicitly with `#[ident(name = "...")]`, the digested name is
//! qualified by the crate that defines the type, the shape of its fields or variants, and the
//! line and column of its declaration, so that distinct types do not share an identity by
//! accident. Types opt in to sharing one by giving the same explicit name.

use {
    proc_macro2::TokenStream,
    quote::{quote, ToTokens},
    syn::{
        parse_quote, spanned::Spanned, Data, DeriveInput, GenericParam, Lit, Meta, NestedMeta,
    },
};

use crate::{
    digest::{digest, inductive_list, located_name},
    CodegenError,
};

/// The name of the helper attribute accepted by the derive.
pub const ATTRIBUTE: &str = "ident";

/// Generate the `Ident` impl for a type definition, declared in the crate named `origin`.
pub fn derive_ident(
    input: &DeriveInput,
    krate: &TokenStream,
    origin: &str,
) -> syn::Result<TokenStream> {
    let name = identity_name(input, origin)?;
    let ty = &input.ident;

    let mut generics = input.generics.clone();
    let mut params = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Type(t) => params.push(t.ident.clone()),
            GenericParam::Lifetime(_) => {}
            GenericParam::Const(c) => {
                return Err(CodegenError::ConstGeneric(c.ident.to_string()).spanned(c.span()))
            }
        }
    }
    {
        let where_clause = generics.make_where_clause();
        for param in &params {
            where_clause
                .predicates
                .push(parse_quote!(#param: #krate::ident::Ident));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let name_digest = digest(&name, krate);
    let param_ids = inductive_list(
        params
            .iter()
            .map(|p| quote!(<#p as #krate::ident::Ident>::Id))
            .collect::<Vec<_>>(),
    );

    Ok(quote! {
        impl #impl_generics #krate::ident::Ident for #ty #ty_generics #where_clause {
            type Id = (#name_digest, #param_ids);
        }
    })
}

/// The name that is hashed into the identity: the one given by `#[ident(name = "...")]`, or else
/// the name of the type qualified by where and how it is declared.
pub fn identity_name(input: &DeriveInput, origin: &str) -> syn::Result<String> {
    let mut name = None;
    for attr in input.attrs.iter().filter(|a| a.path.is_ident(ATTRIBUTE)) {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            other => return Err(CodegenError::MalformedAttribute.spanned(other.span())),
        };
        for nested in &list.nested {
            match nested {
                NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("name") => {
                    let value = match &nv.lit {
                        Lit::Str(s) => s.value(),
                        other => {
                            return Err(CodegenError::MalformedAttribute.spanned(other.span()))
                        }
                    };
                    if value.is_empty() {
                        return Err(CodegenError::EmptyName.spanned(nv.lit.span()));
                    }
                    if name.replace(value).is_some() {
                        return Err(CodegenError::DuplicateName.spanned(nv.span()));
                    }
                }
                other => return Err(CodegenError::MalformedAttribute.spanned(other.span())),
            }
        }
    }
    Ok(name.unwrap_or_else(|| {
        let located = located_name(origin, &input.ident.to_string(), input.ident.span());
        format!("{}{}", located, shape(input))
    }))
}

/// The fields or variants of a type definition, as written.
fn shape(input: &DeriveInput) -> String {
    match &input.data {
        Data::Struct(s) => s.fields.to_token_stream().to_string(),
        Data::Enum(e) => e.variants.to_token_stream().to_string(),
        Data::Union(u) => u.fields.to_token_stream().to_string(),
    }
}
