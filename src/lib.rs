//! Surname spelling variants across Polish, Lithuanian and Russian records.
//!
//! ```
//! use surname_variants::{polish_to_lithuanian, transliterate, RUS};
//!
//! assert_eq!(transliterate("Иванов", RUS), "Ivanov");
//! assert_eq!(
//!     polish_to_lithuanian("Antonowicz").to_vec(),
//!     ["Antonavičius", "Antonowič"]
//! );
//! ```
pub mod context;
pub mod converter;
pub mod ending;
pub mod lang;
pub mod process;
pub mod profile;
pub mod stage;
pub mod variants;

pub use converter::{Converter, ConverterBuilder};
pub use ending::{ConfigError, SuffixRule, SuffixTable};
pub use lang::Lang;
pub use lang::data::{CES, LIT, POL, RUS, all_langs};
pub use stage::normalization::NFC;
pub use variants::Variants;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plain transliteration of `surname` using the tables of `from`.
///
/// Unregistered languages only re-capitalize the input.
pub fn transliterate(surname: &str, from: Lang) -> String {
    Converter::new(from, from).transliterate(surname)
}

/// Ending rewrite for the ordered pair `from → to`; empty if no suffix matches.
pub fn transform_ending(surname: &str, from: Lang, to: Lang) -> Vec<String> {
    Converter::new(from, to).transform_ending(surname)
}

/// Every spelling worth searching for `surname` when moving from `from` to `to`.
pub fn normalize_surname(surname: &str, from: Lang, to: Lang) -> Variants {
    Converter::new(from, to).variants(surname)
}

/// Polish surname → Lithuanian search variants.
pub fn polish_to_lithuanian(surname: &str) -> Variants {
    normalize_surname(surname, POL, LIT)
}

/// Lithuanian surname → Polish search variants.
pub fn lithuanian_to_polish(surname: &str) -> Variants {
    normalize_surname(surname, LIT, POL)
}

/// Polish surname → Russian search variants.
pub fn polish_to_russian(surname: &str) -> Variants {
    normalize_surname(surname, POL, RUS)
}

/// Russian surname → Polish search variants.
pub fn russian_to_polish(surname: &str) -> Variants {
    normalize_surname(surname, RUS, POL)
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
