//! Core rewrite stage abstraction.
//!
//! A surname passes through a short, statically chained list of stages (see
//! [`crate::profile::preset`]). Every stage gets a cheap `needs_apply` pre-check and
//! a stage with nothing to do hands its input on without copying.
//!
//! Stages are total: no rewrite can fail, so `apply` returns the text directly.

pub mod capitalize;
pub mod compose_digraphs;
pub mod lower_case;
pub mod normalization;
pub mod strip_diacritics;

use crate::context::Context;
use std::borrow::Cow;

/// A single rewrite step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in trace logs.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
