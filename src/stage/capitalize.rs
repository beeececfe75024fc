use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// First char upper-case, the rest lower-case.
pub struct Capitalize;

#[inline]
fn is_capitalized(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.to_uppercase().eq(std::iter::once(first))
        && chars.all(|c| c.to_lowercase().eq(std::iter::once(c)))
}

/// Zero-copy when `text` is already capitalized.
pub fn capitalize(text: &str) -> Cow<'_, str> {
    if is_capitalized(text) {
        return Cow::Borrowed(text);
    }
    let mut chars = text.chars();
    let mut out = String::with_capacity(text.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    out.extend(chars.flat_map(char::to_lowercase));
    Cow::Owned(out)
}

impl Stage for Capitalize {
    fn name(&self) -> &'static str {
        "capitalize"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !is_capitalized(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if is_capitalized(&text) {
            return text;
        }
        Cow::Owned(capitalize(&text).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes() {
        assert_eq!(capitalize("kowalski"), "Kowalski");
        assert_eq!(capitalize("KOWALSKI"), "Kowalski");
        assert_eq!(capitalize("šymanski"), "Šymanski");
        assert_eq!(capitalize("ivanov"), "Ivanov");
    }

    #[test]
    fn empty_and_single_char() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn zero_copy_when_capitalized() {
        let input = "Antonavičius";
        assert!(matches!(capitalize(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn caseless_first_char() {
        assert_eq!(capitalize("'t hooft"), "'t hooft");
        assert_eq!(capitalize("ÓSKAR"), "Óskar");
    }

    #[test]
    fn stage_agrees_with_helper() {
        let ctx = Context::default();
        assert!(Capitalize.needs_apply("nowak", &ctx));
        assert!(!Capitalize.needs_apply("Nowak", &ctx));
        assert_eq!(Capitalize.apply(Cow::Borrowed("nOWAK"), &ctx), "Nowak");
    }
}
