use crate::{
    NFC,
    process::Process,
    profile::Profile,
    stage::{
        capitalize::Capitalize, compose_digraphs::ComposeDigraphs, lower_case::LowerCase,
        strip_diacritics::StripDiacritics,
    },
};

/// Plain surname transliteration: the Normalizer.
///
/// lower-case → strip diacritics/Cyrillic → Polish digraphs → capitalize
pub fn transliteration() -> Profile<impl Process> {
    Profile::builder("transliteration")
        .add_stage(LowerCase)
        .add_stage(StripDiacritics)
        .add_stage(ComposeDigraphs)
        .add_stage(Capitalize)
        .build()
}

/// Same as [`transliteration`] with NFC composition of the raw input first.
pub fn composed_transliteration() -> Profile<impl Process> {
    Profile::builder("composed_transliteration")
        .add_stage(NFC)
        .add_stage(LowerCase)
        .add_stage(StripDiacritics)
        .add_stage(ComposeDigraphs)
        .add_stage(Capitalize)
        .build()
}

/// NFC composition only; lets ending rules see composed letters.
pub fn composed_input() -> Profile<impl Process> {
    Profile::builder("composed_input").add_stage(NFC).build()
}
