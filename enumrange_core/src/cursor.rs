use std::fmt;
use std::marker::PhantomData;

use crate::enumerable::Enumerable;
use crate::repr::EnumRepr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Forward {}
    impl Sealed for super::Reverse {}
}

/// One of the two traversal directions.
///
/// This trait is sealed; `Forward` and `Reverse` are the only directions.
pub trait Direction: sealed::Sealed {}

/// Marker for cursors that advance toward greater discriminants.
#[derive(Copy, Clone, Debug, Default)]
pub struct Forward;

/// Marker for cursors that advance toward smaller discriminants.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reverse;

impl Direction for Forward {}
impl Direction for Reverse {}

/// Shared core of the two cursor variants.
///
/// The position is held as the enumeration's raw integer rather than as an
/// enumeration value: the off-range positions a traversal brushes against
/// (`PAST_LAST`, one before `FIRST`) need no declared variant this way.
pub struct Cursor<E: Enumerable, D: Direction> {
    raw: E::Repr,
    direction: PhantomData<D>,
}

/// A cursor over `E` that advances toward greater discriminants.
pub type ForwardCursor<E> = Cursor<E, Forward>;

/// A cursor over `E` that advances toward smaller discriminants.
///
/// Beware that `advance` and `retreat` mirror their `ForwardCursor`
/// meaning: advancing a reverse traversal steps the discriminant down.
pub type ReverseCursor<E> = Cursor<E, Reverse>;

impl<E: Enumerable, D: Direction> Cursor<E, D> {
    /// Wrap an enumeration value. The value is trusted, nothing is checked.
    pub fn at(value: E) -> Self {
        Cursor::from_raw(value.to_repr())
    }

    pub(crate) fn from_raw(raw: E::Repr) -> Self {
        Cursor {
            raw,
            direction: PhantomData,
        }
    }

    /// The wrapped enumeration value.
    ///
    /// Panics when the cursor sits on a position with no declared variant,
    /// which only happens after stepping past a sentinel.
    pub fn value(&self) -> E {
        E::from_repr(self.raw)
    }

    pub(crate) fn raw(&self) -> E::Repr {
        self.raw
    }

    pub(crate) fn step_up(&mut self) {
        self.raw = self.raw.succ();
    }

    pub(crate) fn step_down(&mut self) {
        self.raw = self.raw.pred();
    }
}

impl<E: Enumerable> Cursor<E, Forward> {
    /// Move one position toward `PAST_LAST`.
    pub fn advance(&mut self) {
        self.step_up();
    }

    /// Move one position toward `FIRST`.
    pub fn retreat(&mut self) {
        self.step_down();
    }
}

impl<E: Enumerable> Cursor<E, Reverse> {
    /// Move one position toward `FIRST`: a reverse traversal steps down.
    pub fn advance(&mut self) {
        self.step_down();
    }

    /// Move one position toward `PAST_LAST`.
    pub fn retreat(&mut self) {
        self.step_up();
    }
}

impl<E: Enumerable, D: Direction> Clone for Cursor<E, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Enumerable, D: Direction> Copy for Cursor<E, D> {}

impl<E: Enumerable, D: Direction> PartialEq for Cursor<E, D> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E: Enumerable, D: Direction> Eq for Cursor<E, D> {}

impl<E: Enumerable, D: Direction> fmt::Debug for Cursor<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.raw).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cursor, ForwardCursor, ReverseCursor};
    use crate::enumerable::Enumerable;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    enum Tone {
        Low,
        Mid,
        High,
        End,
    }

    impl Enumerable for Tone {
        type Repr = u8;

        const FIRST: Self = Tone::Low;
        const PAST_LAST: Self = Tone::End;
        const FIRST_RAW: i128 = Tone::Low as i128;
        const PAST_LAST_RAW: i128 = Tone::End as i128;

        fn to_repr(self) -> u8 {
            self as u8
        }

        fn from_repr(repr: u8) -> Self {
            match repr {
                0 => Tone::Low,
                1 => Tone::Mid,
                2 => Tone::High,
                3 => Tone::End,
                _ => panic!("no Tone with value {}", repr),
            }
        }
    }

    #[test]
    fn dereference_is_idempotent() {
        let it: ForwardCursor<Tone> = Cursor::at(Tone::Mid);
        assert_eq!(it.value(), Tone::Mid);
        assert_eq!(it.value(), Tone::Mid);
    }

    #[test]
    fn forward_steps() {
        let mut it: ForwardCursor<Tone> = Cursor::at(Tone::Low);
        it.advance();
        assert_eq!(it.value(), Tone::Mid);
        it.advance();
        assert_eq!(it.value(), Tone::High);
        it.retreat();
        assert_eq!(it.value(), Tone::Mid);
    }

    #[test]
    fn reverse_steps_are_mirrored() {
        let mut it: ReverseCursor<Tone> = Cursor::at(Tone::High);
        it.advance();
        assert_eq!(it.value(), Tone::Mid);
        it.retreat();
        assert_eq!(it.value(), Tone::High);
    }

    #[test]
    fn equality_follows_the_wrapped_value() {
        let a: ForwardCursor<Tone> = Cursor::at(Tone::Mid);
        let b: ForwardCursor<Tone> = Cursor::at(Tone::Mid);
        let c: ForwardCursor<Tone> = Cursor::at(Tone::High);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn advanced_cursor_differs_from_its_origin() {
        let origin: ForwardCursor<Tone> = Cursor::at(Tone::Low);
        let mut it = origin;
        it.advance();
        assert_ne!(origin, it);
        it.advance();
        assert_ne!(origin, it);
        it.retreat();
        it.retreat();
        assert_eq!(origin, it);
    }

    #[test]
    #[should_panic]
    fn dereference_past_the_sentinel_panics() {
        let mut it: ForwardCursor<Tone> = Cursor::at(Tone::End);
        it.advance();
        it.value();
    }
}
