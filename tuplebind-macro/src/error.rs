use {proc_macro2::Span, thiserror::Error};

/// The reasons `#[derive(Unpack)]` or one of the generating macros can refuse its input.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("`Unpack` cannot be derived for an enum, whose variants have no single positional layout")]
    Enum,
    #[error("`Unpack` cannot be derived for a union, whose fields overlap rather than follow one another")]
    Union,
    #[error("could not locate the `tuplebind` crate to derive `Unpack` against: {0}")]
    MissingCrate(#[from] proc_macro_crate::Error),
    #[error("arity bound {requested} exceeds the largest supported bound {max}")]
    BoundTooLarge { requested: usize, max: usize },
}

impl DeriveError {
    /// Attach this error to a location in the macro input, so it can be emitted as a compile error.
    pub fn spanned(self, span: Span) -> syn::Error {
        syn::Error::new(span, self)
    }
}
