//! Conversions between flat tuples `(A, B, C)` and inductive lists `(A, (B, (C, ())))`, together
//! with the other per-arity impls every tuple needs: borrowing all elements at once and a type
//! identity.

use {
    proc_macro2::{Ident, TokenStream},
    quote::{format_ident, quote},
};

use crate::{
    digest::{digest, inductive_list},
    CodegenError,
};

/// The largest arity accepted by [`tuple_impls`].
pub const MAX_ARITY: usize = 256;

/// The name hashed to form the identity of tuples.
pub const TUPLE_NAME: &str = "(..)";

/// Generate the impls of `Tuple`, `List`, `AsRefs` and `Ident` for every tuple of arity `0..=max`.
pub fn tuple_impls(max: usize, krate: &TokenStream) -> Result<TokenStream, CodegenError> {
    if max > MAX_ARITY {
        return Err(CodegenError::LimitExceeded {
            requested: max,
            limit: MAX_ARITY,
        });
    }

    let mut impls = TokenStream::new();
    for arity in 0..=max {
        impls.extend(arity_impls(arity, krate));
    }
    Ok(impls)
}

/// The impls for a single arity.
pub fn arity_impls(arity: usize, krate: &TokenStream) -> TokenStream {
    let tys: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let vals: Vec<Ident> = (0..arity).map(|i| format_ident!("t{}", i)).collect();

    let list_ty = inductive_list(tys.iter().map(|t| quote!(#t)).collect::<Vec<_>>());
    let list_val = inductive_list(vals.iter().map(|v| quote!(#v)).collect::<Vec<_>>());
    let ids = inductive_list(
        tys.iter()
            .map(|t| quote!(<#t as #krate::ident::Ident>::Id))
            .collect::<Vec<_>>(),
    );
    let tuple_digest = digest(TUPLE_NAME, krate);

    let generics = if arity == 0 {
        quote!()
    } else {
        quote!(<#(#tys),*>)
    };
    let ident_generics = if arity == 0 {
        quote!()
    } else {
        quote!(<#(#tys: #krate::ident::Ident),*>)
    };

    let (into_list, into_tuple, as_refs) = if arity == 0 {
        (quote!({}), quote!({}), quote!({}))
    } else {
        (
            quote!({
                let (#(#vals,)*) = self;
                #list_val
            }),
            quote!({
                let #list_val = self;
                (#(#vals,)*)
            }),
            quote!({
                let (#(#vals,)*) = self;
                (#(#vals,)*)
            }),
        )
    };

    quote! {
        impl #generics #krate::tuple::Tuple for (#(#tys,)*) {
            type AsList = #list_ty;

            fn into_list(self) -> Self::AsList #into_list
        }

        impl #generics #krate::tuple::List for #list_ty {
            type AsTuple = (#(#tys,)*);

            fn into_tuple(self) -> Self::AsTuple #into_tuple
        }

        impl<'a #(, #tys: 'a)*> #krate::tuple::AsRefs<'a> for (#(#tys,)*) {
            type Refs = (#(&'a #tys,)*);

            fn as_refs(&'a self) -> Self::Refs #as_refs
        }

        impl #ident_generics #krate::ident::Ident for (#(#tys,)*) {
            type Id = (#tuple_digest, #ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_tuple_is_the_empty_list() {
        let krate = quote!(::typeseq);
        let tokens = arity_impls(0, &krate).to_string();
        assert!(tokens.contains(":: typeseq :: tuple :: Tuple for () { type AsList = () ;"));
        assert!(tokens.contains(":: typeseq :: tuple :: List for () { type AsTuple = () ;"));
    }

    #[test]
    fn singleton_keeps_trailing_comma() {
        let krate = quote!(::typeseq);
        let tokens = arity_impls(1, &krate).to_string();
        assert!(tokens.contains("Tuple for (T0 ,) { type AsList = (T0 , ()) ;"));
        assert!(tokens.contains("type Refs = (& 'a T0 ,) ;"));
    }

    #[test]
    fn triple_nests_to_the_right() {
        let krate = quote!(::typeseq);
        let tokens = arity_impls(3, &krate).to_string();
        assert!(tokens.contains("type AsList = (T0 , (T1 , (T2 , ()))) ;"));
        assert!(tokens.contains("List for (T0 , (T1 , (T2 , ()))) { type AsTuple = (T0 , T1 , T2 ,) ;"));
    }

    #[test]
    fn refuses_huge_arities() {
        let krate = quote!(::typeseq);
        assert!(matches!(
            tuple_impls(MAX_ARITY + 1, &krate),
            Err(CodegenError::LimitExceeded { .. })
        ));
    }
}
