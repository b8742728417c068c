//! Conversions between `Number<N>` constants and unary type-level numbers.

use {
    proc_macro2::{Literal, TokenStream},
    quote::quote,
};

use crate::{digest::unary, CodegenError};

/// The largest bound accepted by [`conversion_impls`].
pub const MAX_UNARY: usize = 1024;

/// Generate `ToUnary` for `Number<0>` through `Number<max>`, and the inverse `ToConstant` for the
/// corresponding unary numbers.
pub fn conversion_impls(max: usize, krate: &TokenStream) -> Result<TokenStream, CodegenError> {
    if max > MAX_UNARY {
        return Err(CodegenError::LimitExceeded {
            requested: max,
            limit: MAX_UNARY,
        });
    }

    let mut impls = TokenStream::new();
    for n in 0..=max {
        let lit = Literal::usize_unsuffixed(n);
        let u = unary(n, krate);
        impls.extend(quote! {
            impl #krate::unary::ToUnary for #krate::unary::Number<#lit> {
                type AsUnary = #u;
            }

            impl #krate::unary::ToConstant for #u {
                type AsConstant = #krate::unary::Number<#lit>;
            }
        });
    }
    Ok(impls)
}
