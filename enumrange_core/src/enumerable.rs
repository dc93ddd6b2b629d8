use crate::range::{EnumRange, Iter};
use crate::repr::EnumRepr;

/// The protocol an enumeration satisfies to be traversed as a range.
///
/// An implementor promises a closed, contiguous run of labels delimited by
/// two sentinels:
/// - `FIRST` is the first meaningful label.
/// - `PAST_LAST` is a declared variant whose discriminant is one greater
///   than the last meaningful label. It delimits the range and is never
///   produced by a well-formed traversal.
/// - `FIRST`'s discriminant must not exceed `PAST_LAST`'s. When they are
///   equal the range is empty. `EnumRange` rejects anything else at compile
///   time.
///
/// Whether every discriminant between the sentinels is a *meaningful* label
/// is the implementor's business; the range hands out whatever lies in
/// between.
///
/// The usual way to implement this trait is `#[derive(Enumerable)]` from
/// `enumrange_codegen`:
///
/// ```ignore
/// #[derive(Copy, Clone, Enumerable)]
/// #[repr(u8)]
/// enum Fruit {
///     Apple,
///     Orange,
///     Pear,
///     End,
/// }
///
/// for fruit in EnumRange::<Fruit>::new() {
///     println!("{:?}", fruit);
/// }
/// ```
pub trait Enumerable: Sized + Copy {
    /// The integer type underlying the enumeration.
    type Repr: EnumRepr;

    /// The first meaningful label.
    const FIRST: Self;

    /// The past-the-end sentinel.
    const PAST_LAST: Self;

    /// `FIRST`'s discriminant, widened so the ordering of the sentinels can
    /// be checked in const context (trait methods cannot be called there).
    const FIRST_RAW: i128;

    /// `PAST_LAST`'s discriminant, widened like `FIRST_RAW`.
    const PAST_LAST_RAW: i128;

    /// The discriminant of this value.
    fn to_repr(self) -> Self::Repr;

    /// The value whose discriminant is `repr`.
    ///
    /// Panics if no declared variant has that discriminant; a traversal that
    /// stops at the sentinel, as every well-formed loop does, never triggers
    /// this.
    fn from_repr(repr: Self::Repr) -> Self;

    /// Iterate every value in `[FIRST, PAST_LAST)` in discriminant order.
    fn enumerate() -> Iter<Self> {
        EnumRange::new().into_iter()
    }
}
