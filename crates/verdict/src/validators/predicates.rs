//! Generic rule predicates
//!
//! Building blocks for [`Validator::must`](crate::validators::Validator::must).
//! Every string predicate except [`required`] passes on an empty value, so a
//! chain reports a missing value once (through `required`) instead of once
//! per rule.
//!
//! Length is measured in Unicode scalar values (chars).

use crate::foundation::{Result, VerdictError};
use regex::Regex;

// ============================================================================
// PRESENCE
// ============================================================================

/// Passes when the string has a non-whitespace character.
pub fn required() -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    |input: &str| !input.trim().is_empty()
}

/// Passes when the option holds a value.
pub fn present<T>() -> impl Fn(&Option<T>) -> bool + Clone + Send + Sync + 'static
where
    T: 'static,
{
    |input: &Option<T>| input.is_some()
}

// ============================================================================
// LENGTH
// ============================================================================

/// Passes when the string is empty or has at least `min` characters.
pub fn min_length(min: usize) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    move |input: &str| input.is_empty() || input.chars().count() >= min
}

/// Passes when the string has at most `max` characters.
pub fn max_length(max: usize) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    move |input: &str| input.chars().count() <= max
}

/// Passes when the string is empty or its length is within `min..=max`.
pub fn length_between(
    min: usize,
    max: usize,
) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    move |input: &str| {
        if input.is_empty() {
            return true;
        }
        let len = input.chars().count();
        len >= min && len <= max
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// Passes when the string is empty or matches `regex`.
pub fn matches(regex: Regex) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static {
    move |input: &str| input.is_empty() || regex.is_match(input)
}

/// Compiles `source` and returns a [`matches`] predicate for it.
///
/// # Errors
///
/// Returns [`VerdictError::InvalidArgument`] if `source` is not a valid
/// regular expression.
pub fn pattern(source: &str) -> Result<impl Fn(&str) -> bool + Clone + Send + Sync + 'static> {
    let regex =
        Regex::new(source).map_err(|e| VerdictError::invalid_argument("pattern", e.to_string()))?;
    Ok(matches(regex))
}

/// Passes when the string is empty or equals one of `allowed`.
pub fn one_of<I, S>(allowed: I) -> impl Fn(&str) -> bool + Clone + Send + Sync + 'static
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    move |input: &str| input.is_empty() || allowed.iter().any(|a| a == input)
}

// ============================================================================
// RANGE
// ============================================================================

/// Passes when the value is within `min..=max`.
pub fn in_range<N>(min: N, max: N) -> impl Fn(&N) -> bool + Send + Sync + 'static
where
    N: PartialOrd + Send + Sync + 'static,
{
    move |input: &N| *input >= min && *input <= max
}

/// Passes when the value is at least `min`.
pub fn at_least<N>(min: N) -> impl Fn(&N) -> bool + Send + Sync + 'static
where
    N: PartialOrd + Send + Sync + 'static,
{
    move |input: &N| *input >= min
}

/// Passes when the value is at most `max`.
pub fn at_most<N>(max: N) -> impl Fn(&N) -> bool + Send + Sync + 'static
where
    N: PartialOrd + Send + Sync + 'static,
{
    move |input: &N| *input <= max
}
