/*!
![license: MIT](https://img.shields.io/github/license/boltlabs-inc/tuplebind)
[![crates.io](https://img.shields.io/crates/v/tuplebind)](https://crates.io/crates/tuplebind)
[![docs.rs documentation](https://docs.rs/tuplebind/badge.svg)](https://docs.rs/tuplebind)

Destructuring assignment from tuple-like values into variables which already exist, with every
mismatch caught at compile time.

A `let` pattern takes a tuple apart into *new* bindings. Sometimes the places to fill already
exist: fields of a struct being updated, variables declared before a loop, elements of a
collection. This crate provides a [`Binder`] which borrows such places in order, and assigns a
tuple-like value into them, one element per place:

```
use tuplebind::bind;

let (mut count, mut ratio, mut label) = (0, 0.0, "");

bind!(count, ratio, label).set((42, 3.14, "hello"));

assert_eq!(count, 42);
assert_eq!(ratio, 3.14);
assert_eq!(label, "hello");
```

The assignment:

- is checked **entirely at compile time**: a source with the wrong number of elements, or with an
  element that cannot be assigned into the place at the same position, does not compile;
- has **no runtime cost** beyond the assignments themselves: a binder is exactly its borrows, and
  allocates nothing;
- works for **any tuple-like source**: tuples and arrays of up to [`MAX_ARITY`] elements, shared
  references to them (which clone each element), and structs which `#[derive(Unpack)]`;
- is a **plain assignment** at each position by default, so the types of literals are inferred
  from the places they land in; [`set_into`](Binder::set_into) opts in to `From` conversions
  instead, so that an `i32` can be assigned into an `i64` place, or a `&str` into a `String`.

## Quick reference

| Operation | Usage |
| :-------- | :---- |
| Borrow places into a binder | [`bind!(a, b.field, v[i])`](bind!) or [`Binder::new((&mut a, &mut b))`](Binder::new) |
| ... from an inductive list, of any length | [`Binder::from_list((&mut a, (&mut b, ())))`](Binder::from_list) |
| Assign a source into them | [`binder.set(source)`](Binder::set), chainable |
| ... converting each element | [`binder.set_into(source)`](Binder::set_into) |
| Both in one statement | [`assign!((a, b) = source)`](assign!) |
| Make a struct tuple-like | `#[derive(Unpack)]`, or implement [`Unpack`](trait@Unpack) by hand |
| Read one position | [`get::<UnaryOf<N>, _>(source)`](get) |
| Arity of a source type | [`Arity<T>`](Arity) (as a type), [`Unpack::ARITY`] (as a `usize`) |

The **[tutorial]** walks through each of these, including what the compile errors look like.

The **[`prelude`]** module exports what most programs need: `use tuplebind::prelude::*;`.

[tutorial]: tutorial
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Derived impls name this crate as `::tuplebind`, including when derived from within it.
#[cfg(all(test, feature = "derive"))]
extern crate self as tuplebind;

pub mod tuple;
pub mod tutorial;
pub mod unary;

mod bind_macro;

mod assignable;
mod binder;
mod unpack;

pub use assignable::{AssignEach, AssignFrom, Convention, Convert, Exact, Slots};
pub use binder::Binder;
pub use unpack::{get, Arity, Unpack};

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use tuplebind_macro::Unpack;

/// The largest number of elements in a tuple or array which is tuple-like out of the box, and the
/// largest arity for which [`unary::UnaryOf`] is defined.
///
/// Larger aggregates can still be tuple-like, by implementing [`Unpack`](trait@Unpack) for them
/// directly, and assigned into a binder built from an inductive list of slots with
/// [`Binder::from_list`].
pub const MAX_ARITY: usize = 32;

static_assertions::const_assert_eq!(
    MAX_ARITY,
    <<<[(); MAX_ARITY] as Unpack>::Elements as tuple::HasLength>::Length as unary::Unary>::VALUE
);

/// The prelude module for quickly getting started with tuplebind.
///
/// This module is designed to be imported as `use tuplebind::prelude::*;`, which brings into scope
/// the binder, its macros and the capability traits.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{assign, bind, get, AssignFrom, Binder, Unpack};
    #[doc(no_inline)]
    pub use crate::unary::UnaryOf;
}

#[cfg(test)]
mod valid_arities {
    include!(concat!(env!("OUT_DIR"), "/valid_arities.rs"));
}
