use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// Must agree with `MAX_ARITY` in the library.
const MAX_ARITY: usize = 32;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for the capability traits at every supported arity. This makes
    // it much less likely that an off-by-one in the generated impls goes unnoticed.

    println!("cargo:rerun-if-changed=build.rs");

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("valid_arities.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "use crate::{{AssignEach, Arity}};")?;
    writeln!(f, "use crate::unary::UnaryOf;")?;
    writeln!(
        f,
        "use static_assertions::{{assert_impl_all, assert_not_impl_any, assert_type_eq_all}};"
    )?;
    writeln!(f)?;

    // Write out the test
    writeln!(f, "#[test]")?;
    writeln!(f, "fn all_arities_valid() {{")?;
    for arity in 0..=MAX_ARITY {
        let shape = Shape::new(arity);
        writeln!(f, "    assert_impl_all!({}: Unpack);", shape.tuple())?;
        writeln!(f, "    assert_impl_all!(&'static {}: Unpack);", shape.tuple())?;
        writeln!(f, "    assert_impl_all!([u8; {}]: Unpack);", arity)?;
        writeln!(f, "    assert_type_eq_all!(Arity<{}>, UnaryOf<{}>);", shape.tuple(), arity)?;
        writeln!(f, "    assert_impl_all!({}: AssignEach<{}>);", shape.slots(), shape.list())?;
        // One element too many, in the source:
        writeln!(
            f,
            "    assert_not_impl_any!({}: AssignEach<{}>);",
            shape.slots(),
            Shape::new(arity + 1).list()
        )?;
        // One slot too many, in the binder:
        writeln!(
            f,
            "    assert_not_impl_any!({}: AssignEach<{}>);",
            Shape::new(arity + 1).slots(),
            shape.list()
        )?;
    }
    writeln!(f, "}}")?;
    Ok(())
}

/// The element types cycled through at successive positions, so that neighbouring positions never
/// share a type and a transposition would be caught.
const ELEMENTS: &[&str] = &["u8", "String", "char", "Vec<u16>", "bool", "i64"];

#[derive(Clone, Debug)]
pub struct Shape {
    elements: Vec<&'static str>,
}

impl Shape {
    pub fn new(arity: usize) -> Shape {
        Shape {
            elements: ELEMENTS.iter().copied().cycle().take(arity).collect(),
        }
    }

    /// The flat tuple of these element types.
    pub fn tuple(&self) -> Tuple<'_> {
        Tuple(self)
    }

    /// The inductive list of these element types.
    pub fn list(&self) -> Nested<'_> {
        Nested {
            shape: self,
            prefix: "",
        }
    }

    /// The inductive list of mutable borrows of these element types.
    pub fn slots(&self) -> Nested<'_> {
        Nested {
            shape: self,
            prefix: "&'static mut ",
        }
    }
}

pub struct Tuple<'a>(&'a Shape);

impl Display for Tuple<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for element in &self.0.elements {
            write!(f, "{}, ", element)?;
        }
        write!(f, ")")
    }
}

pub struct Nested<'a> {
    shape: &'a Shape,
    prefix: &'static str,
}

impl Display for Nested<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for element in &self.shape.elements {
            write!(f, "({}{}, ", self.prefix, element)?;
        }
        write!(f, "()")?;
        for _ in &self.shape.elements {
            write!(f, ")")?;
        }
        Ok(())
    }
}
