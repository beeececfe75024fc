//! stage/strip_diacritics.rs – **Per-language diacritic and Cyrillic stripping**
//! * Polish Ł → l, Lithuanian ė → e, Russian щ → "shch", ъ → ""
//! * Table keys are lower-case; run after [`LowerCase`](super::lower_case::LowerCase)
//! * Zero-cost when the language has no table or the text is ASCII
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
pub struct StripDiacritics;

impl Stage for StripDiacritics {
    fn name(&self) -> &'static str {
        "strip_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.lang_entry.contains_diacritics(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !ctx.lang_entry.contains_diacritics(&text) {
            return text;
        }

        // Replacements are ASCII, so one pass equals replacing key by key.
        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            match ctx.lang_entry.find_diacritic(c) {
                Some(base) => out.push_str(base),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CES, LIT, Lang, POL, RUS};

    fn strip(text: &str, lang: Lang) -> String {
        StripDiacritics
            .apply(Cow::Borrowed(text), &Context::new(lang))
            .into_owned()
    }

    #[test]
    fn polish_letters() {
        assert_eq!(strip("świętochowski", POL), "swietochowski");
        assert_eq!(strip("łódź", POL), "lodz");
    }

    #[test]
    fn lithuanian_letters() {
        assert_eq!(strip("antanavičius", LIT), "antanavicius");
        assert_eq!(strip("žemaitė", LIT), "zemaite");
    }

    #[test]
    fn czech_letters() {
        assert_eq!(strip("dvořák", CES), "dvorak");
    }

    #[test]
    fn russian_multi_char_and_empty_values() {
        assert_eq!(strip("иванов", RUS), "ivanov");
        assert_eq!(strip("щербаков", RUS), "shcherbakov");
        assert_eq!(strip("подъячев", RUS), "podiachev");
        assert_eq!(strip("гоголь", RUS), "gogol");
    }

    #[test]
    fn table_is_per_language() {
        // č is not in the Polish table
        assert_eq!(strip("antanavičius", POL), "antanavičius");
        // Cyrillic untouched outside Russian
        assert_eq!(strip("иванов", POL), "иванов");
    }

    #[test]
    fn zero_copy_without_diacritics() {
        let input = "kowalski";
        let ctx = Context::new(POL);
        assert!(!StripDiacritics.needs_apply(input, &ctx));
        let out = StripDiacritics.apply(Cow::Borrowed(input), &ctx);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn unknown_language_is_noop() {
        let ctx = Context::new(Lang {
            code: "ENG",
            name: "English",
        });
        assert!(!StripDiacritics.needs_apply("świętochowski", &ctx));
        assert_eq!(
            StripDiacritics.apply(Cow::Borrowed("świętochowski"), &ctx),
            "świętochowski"
        );
    }
}
