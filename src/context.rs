// src/context.rs
// Language configuration handed to every stage. Tiny, Copy, 'static data only.

use crate::lang::{Lang, LangEntry};
use crate::POL;

/// Runtime context passed to every rewrite stage.
///
/// Contains:
/// - `lang`: source language of the surname (for logging and debugging)
/// - `lang_entry`: the diacritic and digraph rules used in every hot path
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lang_entry: LangEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(POL)
    }
}

impl Context {
    /// Unregistered languages get [`LangEntry::EMPTY`].
    #[inline(always)]
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            lang_entry: lang.entry(),
        }
    }
}

