//! Braced rendering of sequences for demo narration.
//!
//! Every section prints its inputs and outputs as `{a,b,c}`; the two
//! helpers here are the only formatting machinery the tour needs.

use itertools::Itertools;
use std::fmt::Display;

/// Render a sequence of displayable items as `{a,b,c}`.
pub fn braced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("{{{}}}", items.into_iter().join(","))
}

/// Render a sequence as `{..}` through a per-item rendering closure,
/// for element types without a useful `Display`.
pub fn braced_with<I, F, S>(items: I, f: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: Display,
{
    format!("{{{}}}", items.into_iter().map(f).join(","))
}
