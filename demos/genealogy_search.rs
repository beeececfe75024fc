use std::error::Error;

use surname_variants::{
    Converter, LIT, Lang, POL, RUS, lithuanian_to_polish, polish_to_lithuanian,
    polish_to_russian, russian_to_polish,
};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // Fixed pairs – the usual starting point for a record search
    // ────────────────────────────────────────────────────────────────
    let cases: &[(&str, fn(&str) -> surname_variants::Variants, &str)] = &[
        ("Antonowicz", polish_to_lithuanian, "POL → LIT"),
        ("Wiśniewski", polish_to_lithuanian, "POL → LIT"),
        ("Jankauskas", lithuanian_to_polish, "LIT → POL"),
        ("Kowalski", polish_to_russian, "POL → RUS"),
        ("Иванов", russian_to_polish, "RUS → POL"),
    ];

    for (surname, convert, pair) in cases {
        let variants = convert(surname);
        println!("{pair}  {surname:<14} → {}", join(variants.iter()));
    }

    // ────────────────────────────────────────────────────────────────
    // Tags from a record export, e.g. "polish" / "LIT"
    // ────────────────────────────────────────────────────────────────
    let from = Lang::from_code("polish").unwrap_or(POL);
    let to = Lang::from_code("LIT").unwrap_or(LIT);
    let converter = Converter::new(from, to);
    println!(
        "{} → {}  {:<14} → {}",
        from.name(),
        to.name(),
        "Walski",
        join(converter.variants("Walski").iter())
    );

    // ────────────────────────────────────────────────────────────────
    // Regional rules on top: Ukrainian-style "-enko" recorded as "-enka"
    // ────────────────────────────────────────────────────────────────
    let regional = Converter::builder()
        .source(RUS)
        .target(POL)
        .ending_rules([("enko", ["enka", "enki"])])?
        .compose_input(true)
        .build();
    println!(
        "custom      {:<14} → {}",
        "Шевченко",
        join(regional.variants("Шевченко").iter())
    );
    println!(
        "custom      {:<14} → {}",
        "Shevchenko",
        join(regional.variants("Shevchenko").iter())
    );

    Ok(())
}

fn join<'a>(variants: impl Iterator<Item = &'a str>) -> String {
    variants.collect::<Vec<_>>().join(", ")
}
