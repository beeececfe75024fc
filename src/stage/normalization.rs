use crate::{context::Context, stage::Stage};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Unicode Normalization Form C (Canonical Composition).
///
/// Records keyed in from different systems mix precomposed `ś` with
/// `s` + U+0301. The diacritic tables only know the precomposed form, so this
/// stage goes first when a converter is built with `compose_input(true)`.
#[derive(Default, Clone, Copy)]
pub struct NfcStage;

pub const NFC: NfcStage = NfcStage;

impl Stage for NfcStage {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_ascii() && !ICU4X_NFC.is_normalized(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(ICU4X_NFC.normalize(text.as_ref()).into_owned())
    }
}
