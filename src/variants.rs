//! variants.rs – **Ordered, duplicate-free surname variant set**
//!
//! Collects candidates from the ending and transliteration passes, adds the
//! W/V interchange copies and keeps first-occurrence order.
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;

/// Candidate list before expansion; rarely more than a handful of entries.
pub(crate) type Candidates = SmallVec<[String; 8]>;

/// Insertion-ordered set of surname spellings.
#[derive(Clone, Default)]
pub struct Variants {
    set: IndexSet<String>,
}

impl Variants {
    /// Result for an empty surname: a set holding just the input.
    pub(crate) fn single(surname: &str) -> Self {
        let mut set = IndexSet::with_capacity(1);
        set.insert(surname.to_owned());
        Self { set }
    }

    /// Expand W/V interchange, drop empty strings, deduplicate.
    pub(crate) fn from_candidates(candidates: Candidates) -> Self {
        let interchanged: Candidates = candidates
            .iter()
            .filter_map(|c| wv_interchange(c))
            .collect();

        let set: IndexSet<String> = candidates
            .into_iter()
            .chain(interchanged)
            .filter(|v| !v.is_empty())
            .collect();
        log::trace!("composed {} variants", set.len());
        Self { set }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    #[inline]
    pub fn contains(&self, variant: &str) -> bool {
        self.set.contains(variant)
    }

    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.set.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.set.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.set.iter().cloned().collect()
    }
}

/// Leading upper-case `W` ↔ `V`; `None` for any other first letter.
fn wv_interchange(variant: &str) -> Option<String> {
    let swapped = match variant.as_bytes().first()? {
        b'W' => 'V',
        b'V' => 'W',
        _ => return None,
    };
    let mut out = String::with_capacity(variant.len());
    out.push(swapped);
    out.push_str(&variant[1..]);
    Some(out)
}

// Order matters: `IndexSet` equality alone would ignore it.
impl PartialEq for Variants {
    fn eq(&self, other: &Self) -> bool {
        self.set.iter().eq(other.set.iter())
    }
}

impl Eq for Variants {}

impl fmt::Debug for Variants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.set.iter()).finish()
    }
}

impl IntoIterator for Variants {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

impl<'a> IntoIterator for &'a Variants {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}

impl From<Variants> for Vec<String> {
    fn from(v: Variants) -> Self {
        v.set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn interchange_swaps_leading_letter_only() {
        assert_eq!(wv_interchange("Walski").as_deref(), Some("Valski"));
        assert_eq!(wv_interchange("Vavilov").as_deref(), Some("Wavilov"));
        assert_eq!(wv_interchange("walski"), None);
        assert_eq!(wv_interchange("Nowak"), None);
        assert_eq!(wv_interchange(""), None);
    }

    #[test]
    fn derived_copies_follow_originals() {
        let v = Variants::from_candidates(smallvec![
            "Walskis".to_owned(),
            "Walskas".to_owned(),
            "Walski".to_owned(),
        ]);
        assert_eq!(
            v.to_vec(),
            ["Walskis", "Walskas", "Walski", "Valskis", "Valskas", "Valski"]
        );
    }

    #[test]
    fn dedups_and_drops_empty() {
        let v = Variants::from_candidates(smallvec![
            "Nowak".to_owned(),
            String::new(),
            "Nowak".to_owned(),
            "Nowakas".to_owned(),
        ]);
        assert_eq!(v.to_vec(), ["Nowak", "Nowakas"]);
    }

    #[test]
    fn interchange_may_collide_with_original() {
        let v = Variants::from_candidates(smallvec!["Walski".to_owned(), "Valski".to_owned()]);
        assert_eq!(v.to_vec(), ["Walski", "Valski"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Variants::from_candidates(smallvec!["Nowak".to_owned(), "Nowakas".to_owned()]);
        let b = Variants::from_candidates(smallvec!["Nowakas".to_owned(), "Nowak".to_owned()]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn single_keeps_empty_input() {
        let v = Variants::single("");
        assert_eq!(v.len(), 1);
        assert!(v.contains(""));
        assert_eq!(v.first(), Some(""));
    }

    #[test]
    fn iteration_orders() {
        let v = Variants::from_candidates(smallvec!["Wolski".to_owned()]);
        assert_eq!(v.iter().collect::<Vec<_>>(), ["Wolski", "Volski"]);
        assert_eq!(format!("{v:?}"), r#"["Wolski", "Volski"]"#);
        let owned: Vec<String> = v.into();
        assert_eq!(owned, ["Wolski", "Volski"]);
    }
}
