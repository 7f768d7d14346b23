extern crate proc_macro;

use {
    proc_macro::TokenStream,
    syn::{parse_macro_input, DeriveInput, LitInt},
};

mod derive;
mod error;
mod generate;

/// Generate `Tuple` and `List` conversions for every tuple arity from zero up to and including
/// the given bound. Must be invoked where `Tuple` and `List` are in scope.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    generate::bounded(&max, generate::tuple_list_impls)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Generate `Unpack` for every tuple arity up to the given bound, both for owned tuples and for
/// shared references to tuples whose elements are `Clone`. Must be invoked where `Unpack` is in
/// scope.
#[proc_macro]
pub fn impl_unpack_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    generate::bounded(&max, generate::tuple_unpack_impls)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Generate `Unpack` for every array length up to the given bound, both for owned arrays and for
/// shared references to arrays of `Clone` elements. Must be invoked where `Unpack` is in scope.
#[proc_macro]
pub fn impl_unpack_arrays(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    generate::bounded(&max, generate::array_unpack_impls)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Generate the conversion from `Number<N>` to its unary representation for every `N` up to the
/// given bound. Must be invoked where `Number`, `ToUnary`, `S` and `Z` are in scope.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    generate::bounded(&max, generate::unary_conversion_impls)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `Unpack` for a struct, treating its fields as a tuple-like aggregate in declaration
/// order.
///
/// Named fields are unpacked in the order they are written, tuple-struct fields by position, and
/// a unit struct unpacks to the empty aggregate. The derive produces two impls: one consuming the
/// struct, and one for `&Struct` which clones each field (requiring every field type to be
/// `Clone`).
///
/// Enums and unions cannot be derived, because they have no fixed positional layout.
///
/// # Examples
///
/// ```
/// use tuplebind::{bind, Unpack};
///
/// #[derive(Unpack)]
/// struct Reading {
///     sensor: String,
///     celsius: f64,
/// }
///
/// let (mut sensor, mut celsius) = (String::new(), 0.0);
/// let reading = Reading { sensor: "attic".to_string(), celsius: 21.5 };
///
/// bind!(sensor, celsius).set(reading);
/// assert_eq!(sensor, "attic");
/// assert_eq!(celsius, 21.5);
/// ```
#[proc_macro_derive(Unpack)]
pub fn derive_unpack(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::unpack(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
