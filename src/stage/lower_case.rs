use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Code-point lower-casing (`char::to_lowercase`), no locale rules.
pub struct LowerCase;

#[inline(always)]
fn needs_lower(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

/// Zero-copy when nothing is upper-case.
///
/// Unlike `str::to_lowercase` this maps every char independently, so a
/// word-final `Σ` becomes `σ`, not `ς`.
pub fn to_lower(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        if !text.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Borrowed(text);
        }
        return Cow::Owned(text.to_ascii_lowercase());
    }
    if !text.chars().any(needs_lower) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().flat_map(char::to_lowercase).collect())
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.chars().any(needs_lower)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.chars().flat_map(char::to_lowercase).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RUS;

    #[test]
    fn lowers_latin_and_cyrillic() {
        assert_eq!(to_lower("ŚWIĘTOCHOWSKI"), "świętochowski");
        assert_eq!(to_lower("ИВАНОВ"), "иванов");
    }

    #[test]
    fn zero_copy_when_already_lower() {
        let input = "kowalski";
        assert!(matches!(to_lower(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        let input = "łukasiewicz";
        assert!(matches!(to_lower(input), Cow::Borrowed(_)));
    }

    #[test]
    fn final_sigma_is_not_contextual() {
        assert_eq!(to_lower("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn stage_matches_helper() {
        let ctx = Context::new(RUS);
        assert!(LowerCase.needs_apply("Иванов", &ctx));
        assert!(!LowerCase.needs_apply("иванов", &ctx));
        assert_eq!(LowerCase.apply(Cow::Borrowed("Иванов"), &ctx), "иванов");
        let owned = LowerCase.apply(Cow::Owned("иванов".to_owned()), &ctx);
        assert_eq!(owned, "иванов");
    }
}
