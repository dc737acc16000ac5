//! Word table for identifier and keyword interning.
//!
//! Provides O(1) interning and lookup for a single scanner. The table is
//! seeded with the reserved keywords so that their names occupy the first
//! slots, which lets [`Keyword::from_name`] resolve a keyword from the handle
//! alone.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{Keyword, Name};

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Table exceeded `u32::MAX` entries.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "word table exceeded capacity: {} entries, max is {} (0x{:X})",
                count,
                u32::MAX,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Append-only string table.
///
/// Keys are unique and the first insertion wins: interning text that is
/// already present returns the existing [`Name`]. Entries are never removed.
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Rc<str>, Name>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<Rc<str>>,
}

impl StringInterner {
    /// Create a new table with the reserved keywords pre-interned.
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        interner.pre_intern_keywords();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&mut self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.map.get(s) {
            return Ok(name);
        }

        let index = u32::try_from(self.strings.len()).map_err(|_| InternError::Overflow {
            count: self.strings.len(),
        })?;
        let name = Name::from_raw(index);
        let text: Rc<str> = Rc::from(s);
        self.strings.push(Rc::clone(&text));
        self.map.insert(text, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the table exceeds `u32::MAX` entries.
    /// Use `try_intern` for fallible interning.
    pub fn intern(&mut self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Find the name for `s` without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Look up the string for a Name.
    ///
    /// The name must come from this table.
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Number of interned strings, keywords included.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if nothing is interned. Never the case after `new()`.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Pre-intern the reserved keywords in [`Keyword::ALL`] order.
    fn pre_intern_keywords(&mut self) {
        for keyword in Keyword::ALL {
            let name = self.intern(keyword.as_str());
            debug_assert_eq!(Keyword::from_name(name), Some(keyword));
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
