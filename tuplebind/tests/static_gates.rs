//! Which assignments type-check, stated as trait facts about slot lists and sources.

use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
use tuplebind::unary::UnaryOf;
use tuplebind::{Arity, AssignEach, Convert, Unpack};

type Elements<T> = <T as Unpack>::Elements;

type IntFloatText = (
    &'static mut i32,
    (&'static mut f64, (&'static mut &'static str, ())),
);

// Same arity and the same type at each position.
assert_impl_all!(IntFloatText: AssignEach<Elements<(i32, f64, &'static str)>>);

// One element too many or too few.
assert_not_impl_any!(IntFloatText: AssignEach<Elements<(i32, f64, &'static str, u8)>>);
assert_not_impl_any!(IntFloatText: AssignEach<Elements<(i32, f64)>>);
assert_not_impl_any!(IntFloatText: AssignEach<Elements<()>>);

// Right arity, wrong order.
assert_not_impl_any!(IntFloatText: AssignEach<Elements<(f64, i32, &'static str)>>);

// A widening conversion is only accepted when conversions are asked for.
type Wide = (&'static mut i64, (&'static mut String, ()));
assert_not_impl_any!(Wide: AssignEach<Elements<(i32, &'static str)>>);
assert_impl_all!(Wide: AssignEach<Elements<(i32, &'static str)>, Convert>);

// Narrowing is never an assignment.
assert_not_impl_any!(Wide: AssignEach<Elements<(u64, String)>, Convert>);

// Tuples, arrays, references to both, and derived structs agree on arity.
#[allow(dead_code)]
#[derive(Unpack)]
struct Rgb(u8, u8, u8);

#[allow(dead_code)]
#[derive(Unpack)]
struct Empty;

assert_type_eq_all!(Arity<(u8, u8, u8)>, Arity<[u8; 3]>, Arity<&'static [u8; 3]>, Arity<Rgb>, UnaryOf<3>);
assert_type_eq_all!(Arity<()>, Arity<[u8; 0]>, Arity<Empty>, UnaryOf<0>);
assert_type_eq_all!(Elements<Rgb>, Elements<[u8; 3]>);

// Nothing else is tuple-like.
assert_not_impl_any!(u8: Unpack);
assert_not_impl_any!(String: Unpack);
assert_not_impl_any!(Vec<u8>: Unpack);
assert_not_impl_any!(Option<(u8, u8)>: Unpack);
