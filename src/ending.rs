//! ending.rs – **Longest-suffix surname ending rewrite**
//! * Polish "-owicz" → Lithuanian "-avičius", Lithuanian "-auskas" → Polish "-owski", …
//! * One suffix may expand to several candidate replacements
//! * Keys sorted once (longest first, then lexicographic) so the scan is a plain
//!   `ends_with` walk that stops at the first hit
//! * Matching runs on the lower-cased surname; every result is re-capitalized
use crate::stage::{capitalize::capitalize, lower_case::to_lower};
use smallvec::SmallVec;
use std::collections::HashSet;
use thiserror::Error;

/// Raised only while building a caller-supplied [`SuffixTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("suffix table contains an empty suffix")]
    EmptySuffix,

    #[error("suffix `{suffix}` has no replacements")]
    NoReplacements { suffix: String },

    #[error("suffix `{suffix}` is declared more than once")]
    DuplicateSuffix { suffix: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    suffix: String,
    char_len: usize,
    replacements: SmallVec<[String; 3]>,
}

impl SuffixRule {
    fn new(suffix: String, replacements: SmallVec<[String; 3]>) -> Self {
        Self {
            char_len: suffix.chars().count(),
            suffix,
            replacements,
        }
    }

    #[inline(always)]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline(always)]
    pub fn replacements(&self) -> &[String] {
        &self.replacements
    }
}

/// Suffix → replacements map, kept sorted for longest-match lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    rules: Vec<SuffixRule>,
}

impl SuffixTable {
    pub const EMPTY: SuffixTable = SuffixTable { rules: Vec::new() };

    /// Build a table from caller data. Suffixes and replacements are lower-cased.
    pub fn try_new<I, S, R, T>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, R)>,
        S: AsRef<str>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for (suffix, replacements) in entries {
            let suffix = to_lower(suffix.as_ref()).into_owned();
            if suffix.is_empty() {
                return Err(ConfigError::EmptySuffix);
            }
            let replacements: SmallVec<[String; 3]> = replacements
                .into_iter()
                .map(|r| to_lower(r.as_ref()).into_owned())
                .collect();
            if replacements.is_empty() {
                return Err(ConfigError::NoReplacements { suffix });
            }
            if !seen.insert(suffix.clone()) {
                return Err(ConfigError::DuplicateSuffix { suffix });
            }
            rules.push(SuffixRule::new(suffix, replacements));
        }

        log::debug!("built custom suffix table with {} rules", rules.len());
        Ok(Self::sorted(rules))
    }

    /// Build from trusted literal data (validated by tests, not at runtime).
    pub(crate) fn from_static(data: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let rules = data
            .iter()
            .map(|(suffix, reps)| {
                SuffixRule::new(
                    (*suffix).to_owned(),
                    reps.iter().map(|r| (*r).to_owned()).collect(),
                )
            })
            .collect();
        Self::sorted(rules)
    }

    fn sorted(mut rules: Vec<SuffixRule>) -> Self {
        rules.sort_by(|a, b| {
            b.char_len
                .cmp(&a.char_len)
                .then_with(|| a.suffix.cmp(&b.suffix))
        });
        Self { rules }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in match order.
    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Longest suffix that `lowered` ends with.
    #[inline]
    pub fn longest_match(&self, lowered: &str) -> Option<&SuffixRule> {
        self.rules.iter().find(|r| lowered.ends_with(r.suffix.as_str()))
    }
}

/// Rewrite the trailing suffix of `surname` with every mapped replacement.
///
/// * empty input → `[surname]`
/// * no matching suffix → `[]`
/// * otherwise one capitalized result per replacement, in declared order
pub fn transform_ending(surname: &str, table: &SuffixTable) -> Vec<String> {
    if surname.is_empty() {
        return vec![surname.to_owned()];
    }

    let lowered = to_lower(surname);
    let Some(rule) = table.longest_match(&lowered) else {
        return Vec::new();
    };
    log::trace!("`{surname}` matched suffix `{}`", rule.suffix());

    let stem = &lowered[..lowered.len() - rule.suffix().len()];
    rule.replacements()
        .iter()
        .map(|rep| {
            let mut out = String::with_capacity(stem.len() + rep.len());
            out.push_str(stem);
            out.push_str(rep);
            capitalize(&out).into_owned()
        })
        .collect()
}
