/*! The introductory tutorial for tuplebind (nothing is exported from this module).

# Getting started with tuplebind

Rust already lets you take a tuple apart, as long as the variables are new:

```
let (count, label) = (3, "three");
# assert_eq!((count, label), (3, "three"));
```

The [`bind!`] macro does the same for variables which already exist. It borrows each of them, in
order, and returns a [`Binder`]; assigning a tuple into the binder with [`set`](Binder::set)
overwrites each variable with the element at the same position:

```
use tuplebind::prelude::*;

let mut count = 0;
let mut label = "";

bind!(count, label).set((3, "three"));

assert_eq!(count, 3);
assert_eq!(label, "three");
```

Nothing about this is special to local variables. Any place you could write `&mut` in front of
works: fields, indexed elements, dereferenced boxes.

```
# use tuplebind::prelude::*;
struct Stats {
    min: i32,
    max: i32,
}

let mut stats = Stats { min: 0, max: 0 };
let mut names = vec![String::new(); 2];

bind!(stats.min, stats.max, names[1]).set((-4, 9, String::from("second")));

assert_eq!((stats.min, stats.max), (-4, 9));
assert_eq!(names, ["", "second"]);
```

# Assigning more than once

[`set`](Binder::set) returns the binder it was called on, so the same variables can be assigned
again. Each assignment fully replaces what came before:

```
# use tuplebind::prelude::*;
let (mut x, mut y) = (0, 0);

let mut binder = bind!(x, y);
binder.set((1, 2)).set((9, 9));

assert_eq!((x, y), (9, 9));
```

When you only need one assignment, [`assign!`] reads more like an ordinary `=`. It evaluates the
right-hand side *before* borrowing the variables on the left, so the right-hand side may mention
them:

```
# use tuplebind::prelude::*;
let (mut a, mut b) = (1, 1);

for _ in 0..10 {
    assign!((a, b) = (b, a + b));
}

assert_eq!(b, 144);
```

# What counts as a source

Anything [`Unpack`](trait@Unpack) can be assigned from. Out of the box, that means tuples and
arrays of up to [`MAX_ARITY`](crate::MAX_ARITY) elements. A shared reference to either is also a
source: its elements are cloned out of it, and it stays usable afterwards.

```
# use tuplebind::prelude::*;
let defaults = (String::from("guest"), 8080_u16);
let (mut user, mut port) = (String::new(), 0);

bind!(user, port).set(&defaults);

assert_eq!(user, "guest");
assert_eq!(port, 8080);
assert_eq!(defaults.0, "guest"); // still ours
```

Your own structs can be sources too. Deriving [`Unpack`](derive@crate::Unpack) treats the fields as
positions, in the order they are declared:

```
# use tuplebind::prelude::*;
#[derive(Unpack)]
struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
bind!(x, y, z).set(Point3 { x: 1.0, y: 2.0, z: 3.0 });

assert_eq!((x, y, z), (1.0, 2.0, 3.0));
```

If the elements are not simply the fields, implement [`Unpack`](trait@Unpack) by hand, choosing
the element types as an inductive list `(E0, (E1, (..., ())))`:

```
# use tuplebind::prelude::*;
struct Celsius(f64);

impl Unpack for Celsius {
    type Elements = (f64, (f64, ()));

    fn unpack(self) -> Self::Elements {
        (self.0, (self.0 * 9.0 / 5.0 + 32.0, ()))
    }
}

let (mut c, mut f) = (0.0, 0.0);
bind!(c, f).set(Celsius(100.0));

assert_eq!((c, f), (100.0, 212.0));
```

# Conversions at each position

By default, [`set`](Binder::set) is a plain assignment at each position: every element must
already have the type of its variable, exactly as with `=`. That is also what lets an untyped
literal like `3` take on the type of the variable it is assigned into.

When the types differ, but there is a `From` conversion between them, use
[`set_into`](Binder::set_into) instead. Widening an integer, or turning a `&str` into a
`String`, is fine:

```
# use tuplebind::prelude::*;
let (mut total, mut name) = (0_i64, String::new());

bind!(total, name).set_into((7_u32, "seven"));

assert_eq!(total, 7);
assert_eq!(name, "seven");
```

Conversions which could lose information are not assignments, just as they are not `From`
conversions:

```compile_fail
# use tuplebind::prelude::*;
let mut small = 0_u8;
bind!(small).set_into((300_u32,));
```

# Getting stopped

Every check happens while compiling. There is no way for a mismatched assignment to reach a running
program, so there are no errors to handle at runtime.

Assigning three elements into two variables is a type error. The arities of the two sides are
compared as type-level numbers (see [`unary`](crate::unary)), so the error names both of them,
as `S<S<Z>>` (two) against `S<S<S<Z>>>` (three):

```compile_fail
# use tuplebind::prelude::*;
let (mut a, mut b) = (0, 0);
bind!(a, b).set((1, 2, 3));
```

So is assigning the elements of the right arity, but in the wrong order:

```compile_fail
# use tuplebind::prelude::*;
let (mut count, mut label) = (0, String::new());
bind!(count, label).set(("three", 3));
```

And so is naming the same variable twice, which the borrow checker refuses before either
position could overwrite the other:

```compile_fail
# use tuplebind::prelude::*;
let mut a = 0;
bind!(a, a).set((1, 2));
```

# Wrapping up

That is everything: [`bind!`] or [`assign!`] on the left, anything [`Unpack`](trait@Unpack) on
the right, and the compiler keeping the two in line.

You might now want to...

- Read the documentation for **[`Binder`]**, the type behind both macros?
- See how arities are represented in **[`tuple`](crate::tuple)** and
  **[`unary`](crate::unary)**, if you want to write generic code over tuple-like values?
- Jump back to the top of the **[reference documentation](crate#quick-reference)**?
*/

// Import the whole crate so the docs above can link appropriately.
#![allow(unused_imports)]
use crate::prelude::*;
