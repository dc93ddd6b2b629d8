mod cursor;
mod enumerable;
mod range;
mod repr;

pub use cursor::{Cursor, Direction, Forward, ForwardCursor, Reverse, ReverseCursor};
pub use enumerable::Enumerable;
pub use range::{EnumRange, Iter};
pub use repr::EnumRepr;
