//! Type-level natural numbers: zero is [`Z`], and `n + 1` is [`S<n>`](S).
//!
//! Arities and positions are carried in types as these numbers, so the trait solver can compare
//! them: two aggregates have the same number of elements exactly when their
//! [`Length`](crate::tuple::HasLength::Length)s are the same type. [`UnaryOf`] spells a number
//! with an ordinary constant, up to [`MAX_ARITY`](crate::MAX_ARITY).

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
///
/// # Examples
///
/// ```
/// use tuplebind::unary::{Unary, S, Z};
///
/// type Three = S<S<S<Z>>>;
/// assert_eq!(Three::VALUE, 3);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The type-level number for the constant `N`, so that `UnaryOf<2>` is `S<S<Z>>`.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A type-level natural number, either [`Z`] or [`S`] of another.
///
/// # Examples
///
/// ```
/// use tuplebind::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<32>>::VALUE, 32);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// This number as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// `Self < N`, strictly.
///
/// A position `P` exists in an aggregate of length `L` exactly when `P: LessThan<L>`.
///
/// ```
/// use tuplebind::unary::*;
///
/// fn second_of_three() where UnaryOf<1>: LessThan<UnaryOf<3>> {}
/// ```
///
/// The last position of an aggregate is one less than its length, so its length is not a
/// position:
///
/// ```compile_fail
/// # use tuplebind::unary::*;
/// fn past_the_end() where UnaryOf<3>: LessThan<UnaryOf<3>> {}
/// ```
pub trait LessThan<N: Unary>: Unary {}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// A `usize` constant lifted into a type, for [`UnaryOf`].
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

/// The unary spelling of a [`Number`]; implemented for `Number<0>` through `Number<32>`.
pub trait ToUnary {
    /// The unary number with the same value.
    type AsUnary: Unary;
}

tuplebind_macro::generate_unary_conversion_impls!(32);

mod sealed {
    use super::*;

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(UnaryOf<0>, Z);
    assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);

    assert_impl_all!(Z: LessThan<UnaryOf<1>>);
    assert_impl_all!(UnaryOf<4>: LessThan<UnaryOf<32>>);
    assert_not_impl_any!(UnaryOf<4>: LessThan<UnaryOf<4>>);
    assert_not_impl_any!(Z: LessThan<Z>);
    assert_not_impl_any!(Number<33>: ToUnary);

    #[test]
    fn value_matches_constant() {
        assert_eq!(<UnaryOf<7>>::VALUE, 7);
        assert_eq!(<S<S<Z>>>::VALUE, 2);
    }
}
