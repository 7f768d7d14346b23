/// Build a [`Binder`](crate::Binder) over existing variables, for assigning a tuple-like value into
/// them with [`set`](crate::Binder::set).
///
/// Each argument must be a place expression which can be mutably borrowed: a local, a field, an
/// index into a collection, or a dereference. The borrows are held by the binder for as long as it
/// lives, and naming the same place twice is rejected by the borrow checker.
///
/// # Examples
///
/// ```
/// use tuplebind::bind;
///
/// struct Cursor {
///     line: usize,
///     column: usize,
/// }
///
/// let mut cursor = Cursor { line: 0, column: 0 };
/// let mut history = vec![""; 2];
///
/// bind!(cursor.line, cursor.column, history[1]).set((3, 14, "moved"));
///
/// assert_eq!((cursor.line, cursor.column), (3, 14));
/// assert_eq!(history, ["", "moved"]);
/// ```
#[macro_export]
macro_rules! bind {
    ($($slot:expr),* $(,)?) => {
        $crate::Binder::new(($(&mut $slot,)*))
    };
}

/// Assign a tuple-like value into existing variables, position by position, in one statement.
///
/// `assign!((a, b, c) = source)` evaluates `source` first, and only then borrows `a`, `b` and `c`,
/// so the source may read the variables it is about to overwrite.
///
/// # Examples
///
/// ```
/// use tuplebind::assign;
///
/// let (mut x, mut y) = (1, 2);
/// assign!((x, y) = (y, x));
/// assert_eq!((x, y), (2, 1));
///
/// let (mut name, mut score) = ("", 0_u64);
/// assign!((name, score) = ("ada", 99));
/// assert_eq!(name, "ada");
/// assert_eq!(score, 99);
/// ```
///
/// The number of variables must match the number of elements:
///
/// ```compile_fail
/// use tuplebind::assign;
///
/// let (mut a, mut b) = (0, 0);
/// assign!((a, b) = (1, 2, 3));
/// ```
#[macro_export]
macro_rules! assign {
    (($($slot:expr),* $(,)?) = $source:expr) => {{
        let source = $source;
        $crate::bind!($($slot),*).set(source);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn bind_accepts_trailing_comma() {
        let (mut a, mut b) = (0, 0);
        bind!(a, b,).set((1, 2));
        assert_eq!((a, b), (1, 2));
    }

    #[test]
    fn bind_of_nothing_is_empty_binder() {
        let binder = bind!();
        assert_eq!(binder.arity(), 0);
    }

    #[test]
    fn assign_rotates_through_its_own_slots() {
        let (mut a, mut b, mut c) = ('a', 'b', 'c');
        assign!((a, b, c) = (b, c, a));
        assert_eq!((a, b, c), ('b', 'c', 'a'));
    }

    #[test]
    fn assign_into_indexed_and_dereferenced_places() {
        let mut grid = vec![[0u8; 2]; 2];
        let mut pair = (0u16, 0u16);
        let mut boxed = Box::new(String::new());
        assign!((grid[1], pair.1, *boxed) = ([4, 5], 6, String::from("boxed")));
        assert_eq!(grid, [[0, 0], [4, 5]]);
        assert_eq!(pair, (0, 6));
        assert_eq!(*boxed, "boxed");
    }
}
