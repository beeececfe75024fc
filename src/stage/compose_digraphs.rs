//! stage/compose_digraphs.rs – **Digraph → single letter**
//! * Polish sz → š, cz → č, rz → ž
//! * Applied in table order, every occurrence, after diacritic stripping
//! * Languages without digraphs skip the stage entirely
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

pub struct ComposeDigraphs;

impl Stage for ComposeDigraphs {
    fn name(&self) -> &'static str {
        "compose_digraphs"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.lang_entry.contains_digraphs(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut current = text;
        for d in ctx.lang_entry.digraphs {
            if current.contains(d.from) {
                current = Cow::Owned(current.replace(d.from, d.to));
            }
        }
        current
    }
}
