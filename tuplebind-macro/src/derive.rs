use {
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::{crate_name, FoundCrate},
    quote::{quote, ToTokens},
    syn::{
        parse_quote, spanned::Spanned, Data, DeriveInput, Fields, GenericParam, Ident, Index,
        Lifetime, LifetimeDef,
    },
};

use crate::{error::DeriveError, generate::nest};

/// The path by which generated code names the `tuplebind` crate, accounting for renames in the
/// deriving crate's manifest. Within `tuplebind` itself the crate is reachable as `::tuplebind`
/// through `extern crate self`.
fn tuplebind_path(span: Span) -> syn::Result<TokenStream> {
    let name = match crate_name("tuplebind").map_err(|e| DeriveError::from(e).spanned(span))? {
        FoundCrate::Itself => "tuplebind".to_string(),
        FoundCrate::Name(name) => name,
    };
    let ident = Ident::new(&name, span);
    Ok(quote!(::#ident))
}

pub fn unpack(input: DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => return Err(DeriveError::Enum.spanned(data.enum_token.span())),
        Data::Union(data) => return Err(DeriveError::Union.spanned(data.union_token.span())),
    };
    let tuplebind = tuplebind_path(input.ident.span())?;
    let name = &input.ident;

    // Each field is reached by name for named structs and by position for tuple structs.
    let accessors: Vec<TokenStream> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| field.ident.as_ref())
            .map(|ident| ident.to_token_stream())
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| Index::from(i).to_token_stream())
            .collect(),
        Fields::Unit => Vec::new(),
    };
    let types: Vec<_> = fields.iter().map(|field| &field.ty).collect();

    let elements = nest(&types);
    let moved = nest(
        &accessors
            .iter()
            .map(|field| quote!(self.#field))
            .collect::<Vec<_>>(),
    );
    let cloned = nest(
        &accessors
            .iter()
            .map(|field| quote!(::core::clone::Clone::clone(&self.#field)))
            .collect::<Vec<_>>(),
    );

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // The by-reference impl borrows for a fresh lifetime and requires every field to be `Clone`.
    // Each bound is higher-ranked so that a field type which is never `Clone` leaves the impl
    // unusable instead of failing to compile.
    let mut by_ref = input.generics.clone();
    let lifetime = Lifetime::new("'__tuplebind", Span::call_site());
    let unused = Lifetime::new("'__tuplebind_clone", Span::call_site());
    by_ref
        .params
        .insert(0, GenericParam::Lifetime(LifetimeDef::new(lifetime.clone())));
    {
        let where_clause = by_ref.make_where_clause();
        for ty in &types {
            where_clause
                .predicates
                .push(parse_quote!(for<#unused> #ty: ::core::clone::Clone));
        }
    }
    let (ref_impl_generics, _, ref_where_clause) = by_ref.split_for_impl();

    Ok(quote! {
        impl #impl_generics #tuplebind::Unpack for #name #ty_generics #where_clause {
            type Elements = #elements;

            #[allow(clippy::unused_unit)]
            fn unpack(self) -> Self::Elements {
                #moved
            }
        }

        impl #ref_impl_generics #tuplebind::Unpack for &#lifetime #name #ty_generics
            #ref_where_clause
        {
            type Elements = #elements;

            #[allow(clippy::unused_unit)]
            fn unpack(self) -> Self::Elements {
                #cloned
            }
        }
    })
}
