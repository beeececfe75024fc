use crate::ending::SuffixTable;
use crate::lang::{CharMap, DigraphMap, Lang, LangEntry};

use paste::paste;
use phf::{Map, phf_map};
use std::sync::LazyLock;

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $code:ident, $code_str:literal, $name:literal,
        diac: [ $($dfrom:expr => $dto:expr),* $(,)? ],
        digraphs: [ $($gfrom:expr => $gto:expr),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const DIAC: &[CharMap] = &[
                        $(CharMap { from: $dfrom, to: $dto }),*
                    ];

                    pub const DIGRAPHS: &[DigraphMap] = &[
                        $(DigraphMap { from: $gfrom, to: $gto }),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        diacritic_map: [<$code:lower _data>]::DIAC,
                        digraphs: [<$code:lower _data>]::DIGRAPHS,
                    }
                ),*
            };
        }

        // Helper: `Lang::from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            $(
                if code.eq_ignore_ascii_case($code_str) || code.eq_ignore_ascii_case($name) {
                    return Some($code);
                }
            )*
            None
        }

        pub fn all_langs() -> &'static [Lang] {
            &[$($code),*]
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Keys are lower-case: input is lower-cased before lookup.
//    Czech carries a table but takes part in no ending pair.
// ---------------------------------------------------------------------------
define_languages! {
    POL, "POL", "Polish",
        diac: [
            'ą' => "a", 'ć' => "c", 'ę' => "e", 'ł' => "l", 'ń' => "n",
            'ó' => "o", 'ś' => "s", 'ź' => "z", 'ż' => "z",
        ],
        digraphs: [ "sz" => "š", "cz" => "č", "rz" => "ž" ],

    LIT, "LIT", "Lithuanian",
        diac: [
            'ą' => "a", 'č' => "c", 'ę' => "e", 'ė' => "e", 'į' => "i",
            'š' => "s", 'ų' => "u", 'ū' => "u", 'ž' => "z",
        ],
        digraphs: [],

    CES, "CES", "Czech",
        diac: [
            'á' => "a", 'č' => "c", 'ď' => "d", 'é' => "e", 'ě' => "e",
            'í' => "i", 'ň' => "n", 'ó' => "o", 'ř' => "r", 'š' => "s",
            'ť' => "t", 'ú' => "u", 'ů' => "u", 'ý' => "y", 'ž' => "z",
        ],
        digraphs: [],

    RUS, "RUS", "Russian",
        diac: [
            'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d",
            'е' => "e", 'ё' => "e", 'ж' => "zh", 'з' => "z", 'и' => "i",
            'й' => "i", 'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n",
            'о' => "o", 'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t",
            'у' => "u", 'ф' => "f", 'х' => "kh", 'ц' => "ts", 'ч' => "ch",
            'ш' => "sh", 'щ' => "shch", 'ъ' => "", 'ы' => "y", 'ь' => "",
            'э' => "e", 'ю' => "iu", 'я' => "ia",
        ],
        digraphs: [],
}

/// Literal suffix rules for one ordered language pair, in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct EndingData {
    pub from: Lang,
    pub to: Lang,
    pub rules: &'static [(&'static str, &'static [&'static str])],
}

macro_rules! define_endings {
    ($(
        $from:ident => $to:ident: [
            $( $suffix:literal => [ $($rep:literal),+ $(,)? ] ),* $(,)?
        ]
    ),* $(,)?) => {
        pub const ENDING_DATA: &[EndingData] = &[
            $(
                EndingData {
                    from: $from,
                    to: $to,
                    rules: &[ $( ($suffix, &[$($rep),+]) ),* ],
                }
            ),*
        ];
    };
}

// ---------------------------------------------------------------------------
//    Surname ending rules per ordered pair
//    Declaration order is irrelevant for matching (longest suffix wins) but
//    replacement order is preserved in the output.
// ---------------------------------------------------------------------------
define_endings! {
    POL => LIT: [
        "owicz" => ["avičius"],
        "owski" => ["ovskis", "ovskas", "ovicius"],
        "ewski" => ["evskis", "evskas"],
        "icki" => ["ickis"],
        "ak" => ["akas"],
        "ski" => ["skis", "skas"],
        "cki" => ["ckis", "ckas"],
    ],
    LIT => POL: [
        "auskas" => ["owski"],
        "avičius" => ["owicz"],
        "ovicius" => ["owski"],
        "ovskis" => ["owski"],
        "ovskas" => ["owski"],
        "evskis" => ["ewski"],
        "evskas" => ["ewski"],
        "aitis" => ["owicz"],
        "ickis" => ["icki"],
        "onis" => ["owicz"],
        "akas" => ["ak"],
        "skis" => ["ski"],
        "skas" => ["ski"],
        "ckis" => ["cki"],
        "ckas" => ["cki"],
    ],
    POL => RUS: [
        "owicz" => ["ovich"],
        "owski" => ["ovskii"],
        "ski" => ["skii"],
        "cki" => ["tskii"],
    ],
    RUS => POL: [
        "ovskii" => ["owski"],
        "ovich" => ["owicz"],
        "tskii" => ["cki"],
        "skii" => ["ski"],
    ],
}

/// Sorted (longest suffix first) form of [`ENDING_DATA`], built once.
pub static ENDING_TABLES: LazyLock<Vec<(Lang, Lang, SuffixTable)>> = LazyLock::new(|| {
    ENDING_DATA
        .iter()
        .map(|d| (d.from, d.to, SuffixTable::from_static(d.rules)))
        .collect()
});
