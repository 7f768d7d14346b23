//! Conversions back and forth between flat tuples like `(P, Q, R)` and their corresponding
//! inductive structures like `(P, (Q, (R, ())))`.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of tuples, for readability. The traits here convert between the two equivalent
//! representations, at both the type and the value level, and let lists be measured and indexed.
//!
//! At present, tuples up to size 32 are supported.

use crate::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Rearrange this tuple's values into the corresponding inductive list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplebind::tuple::Tuple;
    ///
    /// assert_eq!((1, 'b', "c").into_list(), (1, ('b', ("c", ()))));
    /// ```
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Flatten this list's values back into the corresponding tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Index into an inductive list at the type-level position `N`.
///
/// Positions are counted from zero, so `Select<Z>` is the head of the list. Selecting past the end
/// of a list is a type error, because `()` has no `Select` impl at all.
///
/// # Examples
///
/// ```
/// use tuplebind::tuple::{Select, Tuple};
/// use tuplebind::unary::UnaryOf;
///
/// let mut list = (7u8, "seven", 7.0f32).into_list();
/// assert_eq!(*Select::<UnaryOf<1>>::select(&list), "seven");
///
/// *Select::<UnaryOf<2>>::select_mut(&mut list) += 1.0;
/// assert_eq!(Select::<UnaryOf<2>>::into_selected(list), 8.0);
/// ```
pub trait Select<N: Unary>: sealed::Select<N> {
    /// The type of the element at position `N`.
    type Selected;

    /// Borrow the element at position `N`.
    fn select(&self) -> &Self::Selected;

    /// Mutably borrow the element at position `N`.
    fn select_mut(&mut self) -> &mut Self::Selected;

    /// Take the element at position `N`, discarding the rest of the list.
    fn into_selected(self) -> Self::Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;

    fn select(&self) -> &T {
        &self.0
    }

    fn select_mut(&mut self) -> &mut T {
        &mut self.0
    }

    fn into_selected(self) -> T {
        self.0
    }
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Selected = Ts::Selected;

    fn select(&self) -> &Self::Selected {
        Select::<N>::select(&self.1)
    }

    fn select_mut(&mut self) -> &mut Self::Selected {
        Select::<N>::select_mut(&mut self.1)
    }

    fn into_selected(self) -> Self::Selected {
        Select::<N>::into_selected(self.1)
    }
}

tuplebind_macro::impl_tuples!(32);

mod sealed {
    use super::*;

    pub trait Select<N> {}
    impl<T, Ts, N: Unary> Select<N> for (T, Ts) {}
}
