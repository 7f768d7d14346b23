//! The tuple-like capability: aggregates with a statically known number of elements, each of a
//! statically known type, readable by position.

use crate::tuple::{HasLength, Select};
use crate::unary::{LessThan, Unary};

/// A fixed-size aggregate that can be taken apart into its elements, in order.
///
/// An implementation chooses its [`Elements`](Unpack::Elements) as an inductive list
/// `(E0, (E1, (..., ())))`, which fixes both its arity (the length of the list) and the type at
/// each position. Nothing about an `Unpack` value is inspected at runtime to decide whether it fits
/// somewhere: that is decided entirely from `Elements`.
///
/// `Unpack` is implemented for:
///
/// - tuples of up to 32 elements, consuming the tuple;
/// - shared references to such tuples, cloning each element and leaving the tuple intact;
/// - arrays `[T; N]` with `N` up to 32, and shared references to them (cloning);
/// - any struct with `#[derive(Unpack)]`.
///
/// # Examples
///
/// A hand-written implementation for an aggregate whose elements are computed:
///
/// ```
/// use tuplebind::{bind, Unpack};
///
/// struct Span {
///     start: usize,
///     len: usize,
/// }
///
/// impl Unpack for Span {
///     type Elements = (usize, (usize, ()));
///
///     fn unpack(self) -> Self::Elements {
///         (self.start, (self.start + self.len, ()))
///     }
/// }
///
/// let (mut from, mut to) = (0, 0);
/// bind!(from, to).set(Span { start: 4, len: 3 });
/// assert_eq!((from, to), (4, 7));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a tuple-like value with a fixed number of elements",
    label = "cannot be unpacked by position",
    note = "tuples and arrays of up to 32 elements are tuple-like, as are structs with `#[derive(Unpack)]`"
)]
pub trait Unpack: Sized {
    /// The elements of this aggregate, as an inductive list.
    type Elements: HasLength;

    /// The number of elements in this aggregate.
    const ARITY: usize = <<Self::Elements as HasLength>::Length as Unary>::VALUE;

    /// Take this aggregate apart into its elements.
    fn unpack(self) -> Self::Elements;
}

/// The arity of a tuple-like type, as a type-level unary number.
pub type Arity<T> = <<T as Unpack>::Elements as HasLength>::Length;

/// Read the element at the type-level position `N` of any tuple-like value.
///
/// Positions past the end of the value are rejected at compile time.
///
/// # Examples
///
/// ```
/// use tuplebind::get;
/// use tuplebind::unary::UnaryOf;
///
/// let second: &str = get::<UnaryOf<1>, _>((1, "two", 3.0));
/// assert_eq!(second, "two");
///
/// let triple = [String::from("a"), String::from("b"), String::from("c")];
/// assert_eq!(get::<UnaryOf<2>, _>(&triple), "c");
/// assert_eq!(triple.len(), 3);
/// ```
///
/// ```compile_fail
/// use tuplebind::get;
/// use tuplebind::unary::UnaryOf;
///
/// let _ = get::<UnaryOf<3>, _>((1, "two", 3.0));
/// ```
pub fn get<N, T>(source: T) -> <T::Elements as Select<N>>::Selected
where
    N: Unary + LessThan<Arity<T>>,
    T: Unpack,
    T::Elements: Select<N>,
{
    Select::<N>::into_selected(source.unpack())
}

tuplebind_macro::impl_unpack_tuples!(32);
tuplebind_macro::impl_unpack_arrays!(32);
