//! Assignability, position by position and then across a whole list of slots.
//!
//! What it means for a value to be assignable into a place is a parameter, called the *convention*:
//! under [`Exact`], the value must already have the place's type, as with a plain `=`; under
//! [`Convert`], it may be anything with a `From` conversion into the place's type.

use crate::tuple::HasLength;

/// The conventions under which a value can be assigned into a place: [`Exact`] or [`Convert`].
///
/// This is a sealed trait, implemented for exactly these two conventions.
pub trait Convention: sealed::Convention {}
impl Convention for Exact {}
impl Convention for Convert {}

/// Assignment as with a plain `=`: the value must have the type of the place it is assigned into.
///
/// Because there is only one type a value can have under this convention, the types of untyped
/// literals are inferred from the places they are assigned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Exact;

/// Assignment through a `From` conversion into the type of the place.
///
/// This accepts the same values as [`Exact`], plus every lossless conversion: an `i32` into an
/// `i64` place, a `&str` into a `String` place. Literals assigned under this convention need a
/// suffix, since many integer types could convert into the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Convert;

/// A place of type `Self` can be overwritten by a value of type `T`, under the convention `How`.
///
/// Under [`Exact`] (the default), this holds when `T` is `Self`. You may implement it for your own
/// types to accept other values as if they were plain assignments. Under [`Convert`], it holds
/// whenever `T: Into<Self>`; lossy conversions such as `f64` into `i32` are not assignments.
///
/// # Examples
///
/// ```
/// use tuplebind::{AssignFrom, Convert, Exact};
///
/// let mut count = 0_u32;
/// AssignFrom::<_, Exact>::assign_from(&mut count, 7);
/// assert_eq!(count, 7);
///
/// let mut owned = String::new();
/// AssignFrom::<_, Convert>::assign_from(&mut owned, "borrowed");
/// assert_eq!(owned, "borrowed");
/// ```
///
/// ```compile_fail
/// use tuplebind::{AssignFrom, Convert};
///
/// let mut narrow = 0_i32;
/// AssignFrom::<_, Convert>::assign_from(&mut narrow, 7.5_f64);
/// ```
#[diagnostic::on_unimplemented(
    message = "a value of type `{T}` cannot be assigned into a slot of type `{Self}`",
    label = "no assignment from `{T}`",
    note = "`set` assigns only values of the slot's own type; `set_into` also accepts `From` conversions"
)]
pub trait AssignFrom<T, How: Convention = Exact> {
    /// Overwrite `self` with `value`, dropping the previous contents.
    fn assign_from(&mut self, value: T);
}

impl<T> AssignFrom<T, Exact> for T {
    fn assign_from(&mut self, value: T) {
        *self = value;
    }
}

impl<V, T: Into<V>> AssignFrom<T, Convert> for V {
    fn assign_from(&mut self, value: T) {
        *self = value.into();
    }
}

/// An inductive list of mutable borrows, each naming one externally owned place.
///
/// This is the shape of the slots held by a [`Binder`](crate::Binder): `()` for no slots, and
/// `(&'a mut V, Vs)` for a slot of type `V` followed by the slots `Vs`.
pub trait Slots: HasLength + sealed::Slots {}

impl Slots for () {}

impl<'a, V, Vs: Slots> Slots for (&'a mut V, Vs) {}

/// Assign every element of the inductive list `Src` into the slot at the same position, under the
/// convention `How`.
///
/// This is implemented exactly when the two lists have the same length and each slot's type is
/// [`AssignFrom`] the source element at its position. Any other pairing has no impl, which is how
/// mismatched assignments are turned away before the program is built.
#[diagnostic::on_unimplemented(
    message = "the slots `{Self}` cannot be assigned from the elements `{Src}`",
    label = "positional assignment does not line up",
    note = "there must be exactly one element for each slot, and each element must be assignable into the slot at the same position"
)]
pub trait AssignEach<Src, How: Convention = Exact>: Slots {
    /// Assign position by position. Each slot is written with its own element only.
    fn assign_each(&mut self, source: Src);
}

impl<How: Convention> AssignEach<(), How> for () {
    fn assign_each(&mut self, (): ()) {}
}

impl<'a, V, Vs, T, Ts, How> AssignEach<(T, Ts), How> for (&'a mut V, Vs)
where
    How: Convention,
    V: AssignFrom<T, How>,
    Vs: AssignEach<Ts, How>,
{
    fn assign_each(&mut self, (head, tail): (T, Ts)) {
        <V as AssignFrom<T, How>>::assign_from(&mut *self.0, head);
        <Vs as AssignEach<Ts, How>>::assign_each(&mut self.1, tail);
    }
}

mod sealed {
    use super::*;

    pub trait Convention {}
    impl Convention for Exact {}
    impl Convention for Convert {}

    pub trait Slots {}
    impl Slots for () {}
    impl<'a, V, Vs: Slots> Slots for (&'a mut V, Vs) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    type Two = (&'static mut i32, (&'static mut String, ()));

    assert_impl_all!(Two: Slots, AssignEach<(i32, (String, ()))>);
    assert_impl_all!(Two: AssignEach<(i16, (&'static str, ())), Convert>);
    assert_not_impl_any!(Two: AssignEach<(i16, (&'static str, ()))>);
    assert_not_impl_any!(Two: AssignEach<(i32, ())>, AssignEach<(i32, ()), Convert>);
    assert_not_impl_any!(Two: AssignEach<(i32, (String, (u8, ())))>);
    assert_not_impl_any!(Two: AssignEach<(String, (i32, ()))>);
    assert_not_impl_any!(Two: AssignEach<(i64, (String, ())), Convert>);
    assert_not_impl_any!((i32, (String, ())): Slots);

    #[test]
    fn exact_assignment_infers_literals() {
        let mut byte = 0_u8;
        AssignFrom::<_, Exact>::assign_from(&mut byte, 255);
        assert_eq!(byte, 255);
    }

    #[test]
    fn convert_assignment_is_lossless() {
        let mut float = 0.0_f64;
        AssignFrom::<_, Convert>::assign_from(&mut float, 3_u8);
        assert_eq!(float, 3.0);

        let mut list: Vec<char> = vec!['z'];
        AssignFrom::<_, Convert>::assign_from(&mut list, ['a', 'b']);
        assert_eq!(list, ['a', 'b']);
    }

    #[test]
    fn assign_each_writes_every_slot() {
        let (mut number, mut text) = (0_i64, "");
        let mut slots = (&mut number, (&mut text, ()));
        AssignEach::<_, Exact>::assign_each(&mut slots, (5, ("five", ())));
        assert_eq!(number, 5);
        assert_eq!(text, "five");
    }

    #[test]
    fn assign_each_converts_every_slot() {
        let (mut number, mut text) = (0_i64, String::new());
        let mut slots = (&mut number, (&mut text, ()));
        AssignEach::<_, Convert>::assign_each(&mut slots, (5_i32, ("five", ())));
        assert_eq!(number, 5);
        assert_eq!(text, "five");
    }
}
