use crate::{
    context::Context,
    ending::{self, ConfigError, SuffixTable},
    lang::{Lang, ending_table},
    profile::preset,
    variants::{Candidates, Variants},
    LIT, POL,
};
use std::borrow::Cow;

/// Surname converter for one ordered language pair.
///
/// Stateless once built; share it across threads freely.
#[derive(Debug, Clone)]
pub struct Converter {
    ctx: Context,
    target: Lang,
    endings: Cow<'static, SuffixTable>,
    compose_input: bool,
}

static EMPTY_TABLE: SuffixTable = SuffixTable::EMPTY;

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// Built-in tables for `from → to`; a pair without rules never rewrites endings.
    pub fn new(from: Lang, to: Lang) -> Self {
        Self::builder().source(from).target(to).build()
    }

    #[inline]
    pub fn source(&self) -> Lang {
        self.ctx.lang
    }

    #[inline]
    pub fn target(&self) -> Lang {
        self.target
    }

    #[inline]
    pub fn endings(&self) -> &SuffixTable {
        &self.endings
    }

    /// Lower-case, strip source-language diacritics, apply digraphs, capitalize.
    pub fn transliterate(&self, surname: &str) -> String {
        if surname.is_empty() {
            return String::new();
        }
        let text = Cow::Borrowed(surname);
        let out = if self.compose_input {
            preset::composed_transliteration().run(text, &self.ctx)
        } else {
            preset::transliteration().run(text, &self.ctx)
        };
        out.into_owned()
    }

    /// Rewrite the surname ending with every mapped replacement.
    /// Empty when no suffix of the pair table matches.
    pub fn transform_ending(&self, surname: &str) -> Vec<String> {
        ending::transform_ending(&self.composed(surname), &self.endings)
    }

    /// All spellings worth searching for `surname`, in first-seen order.
    pub fn variants(&self, surname: &str) -> Variants {
        if surname.is_empty() {
            return Variants::single(surname);
        }
        Variants::from_candidates(self.candidates(surname))
    }

    /// Transliterated ending rewrites followed by the plain transliteration,
    /// before W/V interchange and dedup.
    pub(crate) fn candidates(&self, surname: &str) -> Candidates {
        let input = self.composed(surname);
        let transformed = ending::transform_ending(&input, &self.endings);
        let echoed = transformed.len() == 1 && transformed[0].as_str() == input.as_ref();

        // Transformed endings are normalized with the source table too.
        let mut candidates: Candidates = transformed
            .iter()
            .map(|t| self.transliterate(t))
            .collect();
        if !echoed {
            candidates.push(self.transliterate(&input));
        }
        candidates
    }

    fn composed<'a>(&self, surname: &'a str) -> Cow<'a, str> {
        let text = Cow::Borrowed(surname);
        if self.compose_input {
            preset::composed_input().run(text, &self.ctx)
        } else {
            text
        }
    }
}

pub struct ConverterBuilder {
    source: Lang,
    target: Lang,
    endings: Option<SuffixTable>,
    compose_input: bool,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self {
            source: POL,
            target: LIT,
            endings: None,
            compose_input: false,
        }
    }
}

impl ConverterBuilder {
    pub fn source(mut self, lang: Lang) -> Self {
        self.source = lang;
        self
    }

    pub fn target(mut self, lang: Lang) -> Self {
        self.target = lang;
        self
    }

    /// Replace the built-in ending rules for this pair.
    pub fn endings(mut self, table: SuffixTable) -> Self {
        self.endings = Some(table);
        self
    }

    /// Shorthand for [`SuffixTable::try_new`] + [`endings`](Self::endings).
    pub fn ending_rules<I, S, R, T>(self, entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, R)>,
        S: AsRef<str>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Ok(self.endings(SuffixTable::try_new(entries)?))
    }

    /// NFC-compose input before matching, so decomposed accents are recognized.
    pub fn compose_input(mut self, yes: bool) -> Self {
        self.compose_input = yes;
        self
    }

    pub fn build(self) -> Converter {
        let endings = match self.endings {
            Some(table) => Cow::Owned(table),
            None => Cow::Borrowed(ending_table(self.source, self.target).unwrap_or(&EMPTY_TABLE)),
        };
        Converter {
            ctx: Context::new(self.source),
            target: self.target,
            endings,
            compose_input: self.compose_input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CES, RUS};
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn builder_defaults_to_polish_lithuanian() {
        let c = Converter::builder().build();
        assert_eq!(c.source(), POL);
        assert_eq!(c.target(), LIT);
        assert!(!c.endings().is_empty());
    }

    #[test]
    fn unpaired_languages_get_empty_table() {
        let c = Converter::new(CES, POL);
        assert!(c.endings().is_empty());
        assert!(c.transform_ending("Novák").is_empty());
        assert_eq!(c.variants("Novák").to_vec(), ["Novak"]);
    }

    #[test]
    fn transformed_and_plain_variants() {
        let c = Converter::new(POL, LIT);
        assert_eq!(c.variants("Antonowicz").to_vec(), ["Antonavičius", "Antonowič"]);
    }

    #[test]
    fn echoed_input_is_not_repeated() {
        let c = Converter::builder()
            .source(LIT)
            .target(POL)
            .ending_rules([("as", ["as"])])
            .unwrap()
            .build();
        assert_eq!(c.transform_ending("Petras"), ["Petras"]);
        assert_eq!(c.variants("Petras").to_vec(), ["Petras"]);
    }

    #[test]
    fn custom_rules_override_builtin() {
        let c = Converter::builder()
            .source(POL)
            .target(LIT)
            .ending_rules([("ak", ["akas", "akis"])])
            .unwrap()
            .build();
        assert_eq!(c.endings().len(), 1);
        assert_eq!(c.variants("Nowak").to_vec(), ["Nowakas", "Nowakis", "Nowak"]);
        assert!(c.transform_ending("Kowalski").is_empty());
    }

    #[test]
    fn custom_rules_report_config_errors() {
        let err = Converter::builder()
            .ending_rules([("", ["x"])])
            .err();
        assert_eq!(err, Some(ConfigError::EmptySuffix));
    }

    #[test]
    fn compose_input_recognizes_decomposed_accents() {
        let nfd: String = "Ślązowski".nfd().collect();
        let plain = Converter::new(POL, LIT);
        let composed = Converter::builder()
            .source(POL)
            .target(LIT)
            .compose_input(true)
            .build();
        assert_eq!(composed.transliterate(&nfd), "Slazowski");
        assert_ne!(plain.transliterate(&nfd), "Slazowski");
        let variants = composed.variants(&nfd);
        assert!(variants.contains("Slazovskis"));
        assert!(variants.contains("Slazowski"));
    }

    #[test]
    fn echo_check_sees_composed_input() {
        let nfd: String = "Ślązowski".nfd().collect();
        let c = Converter::builder()
            .source(POL)
            .target(LIT)
            .ending_rules([("ski", ["ski"])])
            .unwrap()
            .compose_input(true)
            .build();
        assert_eq!(c.transform_ending(&nfd), ["Ślązowski"]);
        assert_eq!(c.candidates(&nfd).as_slice(), ["Slazowski"]);
        assert_eq!(c.variants(&nfd).to_vec(), ["Slazowski"]);
    }

    #[test]
    fn russian_source_uses_cyrillic_table() {
        let c = Converter::new(RUS, POL);
        assert_eq!(c.transliterate("Щербаков"), "Shcherbakov");
        assert_eq!(c.variants("Иванов").to_vec(), ["Ivanov"]);
    }

    #[test]
    fn converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
