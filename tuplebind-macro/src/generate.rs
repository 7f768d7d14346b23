//! Per-arity impl generation. Rust has no variadic generics, so every arity gets its own impl,
//! expressed in terms of the inductive list `(T0, (T1, (..., ())))`.

use {
    proc_macro2::{Ident, Literal, TokenStream},
    quote::{format_ident, quote},
    syn::LitInt,
};

use crate::error::DeriveError;

/// Past this, the quadratic number of tokens in nested list types makes compilation crawl.
const MAX_BOUND: usize = 128;

/// Parse the arity bound given to a generating macro and concatenate the impls for every arity
/// from zero up to and including it.
pub fn bounded(max: &LitInt, generate: fn(usize) -> TokenStream) -> syn::Result<TokenStream> {
    let requested = max.base10_parse::<usize>()?;
    if requested > MAX_BOUND {
        return Err(DeriveError::BoundTooLarge {
            requested,
            max: MAX_BOUND,
        }
        .spanned(max.span()));
    }
    Ok((0..=requested).map(generate).collect())
}

fn idents(prefix: &str, arity: usize) -> Vec<Ident> {
    (0..arity).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

/// Right-fold a sequence of tokens into an inductive list: `a, b, c` becomes `(a, (b, (c, ())))`.
pub(crate) fn nest<T: quote::ToTokens>(items: &[T]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote!(()), |tail, head| quote!((#head, #tail)))
}

pub fn tuple_list_impls(arity: usize) -> TokenStream {
    let params = idents("T", arity);
    let values = idents("t", arity);
    let list = nest(&params);
    let list_pattern = nest(&values);

    quote! {
        impl<#(#params),*> Tuple for (#(#params,)*) {
            type AsList = #list;

            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let (#(#values,)*) = self;
                #list_pattern
            }
        }

        impl<#(#params),*> List for #list {
            type AsTuple = (#(#params,)*);

            #[allow(clippy::unused_unit)]
            fn into_tuple(self) -> Self::AsTuple {
                let #list_pattern = self;
                (#(#values,)*)
            }
        }
    }
}

pub fn tuple_unpack_impls(arity: usize) -> TokenStream {
    let params = idents("T", arity);
    let values = idents("t", arity);
    let list = nest(&params);
    let moved = nest(&values);
    let cloned = nest(
        &values
            .iter()
            .map(|v| quote!(::core::clone::Clone::clone(#v)))
            .collect::<Vec<_>>(),
    );

    quote! {
        impl<#(#params),*> Unpack for (#(#params,)*) {
            type Elements = #list;

            #[allow(clippy::unused_unit)]
            fn unpack(self) -> Self::Elements {
                let (#(#values,)*) = self;
                #moved
            }
        }

        impl<'a, #(#params: ::core::clone::Clone),*> Unpack for &'a (#(#params,)*) {
            type Elements = #list;

            #[allow(clippy::unused_unit)]
            fn unpack(self) -> Self::Elements {
                let (#(#values,)*) = self;
                #cloned
            }
        }
    }
}

pub fn array_unpack_impls(len: usize) -> TokenStream {
    let element = vec![quote!(T); len];
    let values = idents("t", len);
    let list = nest(&element);
    let moved = nest(&values);
    let cloned = nest(
        &values
            .iter()
            .map(|v| quote!(::core::clone::Clone::clone(#v)))
            .collect::<Vec<_>>(),
    );
    let len = Literal::usize_unsuffixed(len);

    quote! {
        impl<T> Unpack for [T; #len] {
            type Elements = #list;

            #[allow(clippy::unused_unit)]
            fn unpack(self) -> Self::Elements {
                let [#(#values),*] = self;
                #moved
            }
        }

        impl<'a, T: ::core::clone::Clone> Unpack for &'a [T; #len] {
            type Elements = #list;

            #[allow(clippy::unused_unit)]
            fn unpack(self) -> Self::Elements {
                let [#(#values),*] = self;
                #cloned
            }
        }
    }
}

pub fn unary_conversion_impls(n: usize) -> TokenStream {
    let unary = (0..n).fold(quote!(Z), |inner, _| quote!(S<#inner>));
    let constant = Literal::usize_unsuffixed(n);

    quote! {
        impl ToUnary for Number<#constant> {
            type AsUnary = #unary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    fn normalized(tokens: TokenStream) -> String {
        tokens.to_string().split_whitespace().collect()
    }

    #[test]
    fn nest_builds_right_nested_list() {
        let items = idents("T", 3);
        assert_eq!(normalized(nest(&items)), "(T0,(T1,(T2,())))");
    }

    #[test]
    fn nest_of_nothing_is_unit() {
        assert_eq!(normalized(nest::<Ident>(&[])), "()");
    }

    #[test]
    fn unary_conversion_counts_successors() {
        let generated = normalized(unary_conversion_impls(2));
        assert_eq!(generated, "implToUnaryforNumber<2>{typeAsUnary=S<S<Z>>;}");
    }

    #[test]
    fn singleton_tuple_keeps_trailing_comma() {
        let generated = normalized(tuple_list_impls(1));
        assert!(generated.contains("impl<T0>Tuplefor(T0,)"));
        assert!(generated.contains("typeAsList=(T0,());"));
    }

    #[test]
    fn bounds_past_the_limit_are_refused() {
        let max = LitInt::new("4096", Span::call_site());
        let error = bounded(&max, tuple_list_impls).unwrap_err();
        assert!(error.to_string().contains("exceeds the largest supported bound"));
    }

    #[test]
    fn bounds_include_their_endpoint() {
        let max = LitInt::new("2", Span::call_site());
        let generated = normalized(bounded(&max, unary_conversion_impls).unwrap());
        assert!(generated.contains("Number<0>"));
        assert!(generated.contains("Number<2>"));
        assert!(!generated.contains("Number<3>"));
    }
}
