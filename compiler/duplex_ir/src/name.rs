//! Interned word identifier.
//!
//! A `Name` is an index into a [`StringInterner`](crate::StringInterner).
//! Two names are equal iff they were produced for the same text by the same
//! interner, so word comparison never touches the text.

use std::fmt;

/// Interned word handle.
///
/// Layout: a plain 32-bit index into the interner's string table, assigned in
/// insertion order. The reserved keywords occupy the first slots.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from a raw table index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Table index as `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
