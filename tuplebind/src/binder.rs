use crate::assignable::{AssignEach, Convert, Exact, Slots};
use crate::tuple::{HasLength, Tuple};
use crate::unary::Unary;
use crate::unpack::{Arity, Unpack};

/// A fixed, ordered set of borrowed variables which a tuple-like value can be assigned into, one
/// element per variable.
///
/// A `Binder` is the left-hand side of a destructuring assignment into places that already exist.
/// It is usually built with [`bind!`](crate::bind) and used immediately:
///
/// ```
/// use tuplebind::bind;
///
/// let (mut a, mut b, mut c) = (0, 0.0, "");
/// bind!(a, b, c).set((42, 3.14, "hello"));
///
/// assert_eq!(a, 42);
/// assert_eq!(b, 3.14);
/// assert_eq!(c, "hello");
/// ```
///
/// The type parameter `S` is the inductive list of mutable borrows captured at construction, so a
/// `Binder` over `a: i32, b: f64` is a `Binder<(&mut i32, (&mut f64, ()))>`. Holding those borrows
/// is all it does: it owns nothing, allocates nothing, and releases the variables when dropped.
///
/// # Compile-time checking
///
/// Whether a source fits is decided from types alone, before the program runs. Both the number of
/// elements and the type at each position must line up with the slots, or the assignment does not
/// compile.
///
/// Too many elements:
///
/// ```compile_fail
/// use tuplebind::bind;
///
/// let (mut a, mut b) = (0, 0);
/// bind!(a, b).set((1, 2, 3));
/// ```
///
/// Too few:
///
/// ```compile_fail
/// use tuplebind::bind;
///
/// let (mut a, mut b) = (0, 0);
/// bind!(a, b).set((1,));
/// ```
///
/// An element which cannot be assigned into its slot:
///
/// ```compile_fail
/// use tuplebind::bind;
///
/// let (mut a, mut b) = (0_u8, String::new());
/// bind!(a, b).set(("swapped", 1_u8));
/// ```
///
/// The same variable twice, which would let two positions write the same place:
///
/// ```compile_fail
/// use tuplebind::bind;
///
/// let mut a = 0;
/// bind!(a, a).set((1, 2));
/// ```
#[derive(Debug)]
#[must_use = "a `Binder` does nothing until a value is assigned into it with `set`"]
pub struct Binder<S> {
    slots: S,
}

impl<S: Slots> Binder<S> {
    /// The number of variables this binder assigns into.
    pub const ARITY: usize = <S::Length as Unary>::VALUE;

    /// Capture a tuple of mutable borrows, in order, as the slots of a new binder.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplebind::Binder;
    ///
    /// let (mut x, mut y) = (0, 0);
    /// Binder::new((&mut x, &mut y)).set((1, 2));
    /// assert_eq!((x, y), (1, 2));
    /// ```
    pub fn new<T>(slots: T) -> Self
    where
        T: Tuple<AsList = S>,
    {
        Binder {
            slots: slots.into_list(),
        }
    }

    /// Capture an inductive list of mutable borrows, `(&mut a, (&mut b, ()))`, as the slots of a
    /// new binder.
    ///
    /// Unlike [`new`](Binder::new), this is not limited to [`MAX_ARITY`](crate::MAX_ARITY) slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplebind::Binder;
    ///
    /// let (mut x, mut y) = (0, 0);
    /// Binder::from_list((&mut x, (&mut y, ()))).set((1, 2));
    /// assert_eq!((x, y), (1, 2));
    /// ```
    pub fn from_list(slots: S) -> Self {
        Binder { slots }
    }

    /// Assign each element of `source` into the slot at the same position, and return this binder
    /// so that it can be assigned into again.
    ///
    /// The source is consumed. Passing a shared reference to a tuple or array instead clones each
    /// element out of it, leaving it intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplebind::bind;
    ///
    /// let (mut x, mut y) = (0, 0);
    /// let mut binder = bind!(x, y);
    /// binder.set((1, 2));
    /// binder.set([9, 9]);
    /// assert_eq!((x, y), (9, 9));
    /// ```
    pub fn set<Src>(&mut self, source: Src) -> &mut Self
    where
        Src: Unpack,
        Src::Elements: HasLength<Length = S::Length>,
        S: AssignEach<Src::Elements, Exact>,
    {
        AssignEach::<_, Exact>::assign_each(&mut self.slots, source.unpack());
        self
    }

    /// Like [`set`](Binder::set), but each element may be of any type with a `From` conversion into
    /// the type of its slot, rather than only of the slot's own type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplebind::bind;
    ///
    /// let (mut id, mut name) = (0_u64, String::new());
    /// bind!(id, name).set_into((7_u32, "seven"));
    /// assert_eq!(id, 7);
    /// assert_eq!(name, "seven");
    /// ```
    ///
    /// Conversions which can lose information are still refused:
    ///
    /// ```compile_fail
    /// use tuplebind::bind;
    ///
    /// let mut small = 0_u8;
    /// bind!(small).set_into((300_u32,));
    /// ```
    pub fn set_into<Src>(&mut self, source: Src) -> &mut Self
    where
        Src: Unpack,
        Src::Elements: HasLength<Length = S::Length>,
        S: AssignEach<Src::Elements, Convert>,
    {
        AssignEach::<_, Convert>::assign_each(&mut self.slots, source.unpack());
        self
    }

    /// The number of variables this binder assigns into.
    pub fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Whether `Src` has exactly as many elements as this binder has slots.
    ///
    /// This is a compile-time fact, surfaced as a value for use in generic code and tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuplebind::bind;
    ///
    /// let (mut x, mut y) = (0, 0);
    /// let binder = bind!(x, y);
    /// assert!(binder.fits::<(u8, u8)>());
    /// assert!(!binder.fits::<[u8; 3]>());
    /// ```
    pub fn fits<Src: Unpack>(&self) -> bool {
        <Arity<Src> as Unary>::VALUE == Self::ARITY
    }
}
