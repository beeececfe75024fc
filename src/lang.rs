pub mod data;

use crate::ending::SuffixTable;
use data::{ENDING_TABLES, LANG_TABLE};

/// Language tag. Only `code` takes part in table lookups, so a caller-built
/// `Lang` with an unregistered code is valid and resolves to empty tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Parse a tag such as `"POL"`, `"pol"` or `"polish"`.
    pub fn from_code(code: &str) -> Option<Lang> {
        data::from_code(code)
    }

    /// Static rules for this language; empty for unregistered codes.
    #[inline]
    pub fn entry(&self) -> LangEntry {
        LANG_TABLE
            .get(self.code)
            .copied()
            .unwrap_or(LangEntry::EMPTY)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CharMap {
    pub from: char,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct DigraphMap {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    /// Lower-case accented or Cyrillic char → base-Latin string.
    pub diacritic_map: &'static [CharMap],
    /// Applied in order, after diacritic stripping.
    pub digraphs: &'static [DigraphMap],
}

impl LangEntry {
    pub const EMPTY: LangEntry = LangEntry {
        diacritic_map: &[],
        digraphs: &[],
    };

    #[inline(always)]
    pub fn has_diacritics(&self) -> bool {
        !self.diacritic_map.is_empty()
    }

    #[inline(always)]
    pub fn has_digraphs(&self) -> bool {
        !self.digraphs.is_empty()
    }

    #[inline(always)]
    pub fn find_diacritic(&self, c: char) -> Option<&'static str> {
        self.diacritic_map.iter().find(|m| m.from == c).map(|m| m.to)
    }

    #[inline]
    pub fn contains_diacritics(&self, text: &str) -> bool {
        if !self.has_diacritics() || text.is_ascii() {
            return false;
        }
        text.chars().any(|c| self.find_diacritic(c).is_some())
    }

    #[inline]
    pub fn contains_digraphs(&self, text: &str) -> bool {
        self.digraphs.iter().any(|d| text.contains(d.from))
    }
}

/// Built-in ending table for an ordered language pair.
pub fn ending_table(from: Lang, to: Lang) -> Option<&'static SuffixTable> {
    ENDING_TABLES
        .iter()
        .find(|(f, t, _)| f.code == from.code && t.code == to.code)
        .map(|(_, _, table)| table)
}
