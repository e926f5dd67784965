//! Input validation.
//!
//! Everything the sorter assumes about its input (non-negative, bounded,
//! distinct) is checked here, before any container is filled.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use pmerge_core::Element;
use rand::seq::index::sample;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+$").expect("token pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no arguments provided")]
    NoArguments,
    #[error("invalid token '{0}'")]
    InvalidToken(String),
    #[error("value too large: {token} (max {max})")]
    ValueTooLarge { token: String, max: Element },
    #[error("duplicate value detected: {0}")]
    Duplicate(Element),
    #[error("cannot draw {count} distinct values from 1..={max}")]
    RangeTooSmall { count: usize, max: Element },
}

/// Validated input: the tokens as the user wrote them and their values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub tokens: Vec<String>,
    pub values: Vec<Element>,
}

impl Input {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse one token: an optional `+` followed by decimal digits, at most `max`.
pub fn parse_token(token: &str, max: Element) -> Result<Element, InputError> {
    if !TOKEN.is_match(token) {
        return Err(InputError::InvalidToken(token.to_string()));
    }
    let digits = token.trim_start_matches('+');
    // Digit strings too long for u64 are too large by definition.
    match digits.parse::<u64>() {
        Ok(value) if value <= u64::from(max) => Ok(value as Element),
        _ => Err(InputError::ValueTooLarge {
            token: token.to_string(),
            max,
        }),
    }
}

/// Parse and validate every token, rejecting the first duplicate value.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S], max: Element) -> Result<Input, InputError> {
    if tokens.is_empty() {
        return Err(InputError::NoArguments);
    }

    let mut values = Vec::with_capacity(tokens.len());
    let mut seen = HashSet::with_capacity(tokens.len());
    for token in tokens {
        let value = parse_token(token.as_ref(), max)?;
        if !seen.insert(value) {
            return Err(InputError::Duplicate(value));
        }
        values.push(value);
    }

    Ok(Input {
        tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
        values,
    })
}

/// Draw `count` distinct values from `1..=max` in random order.
pub fn random_input<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max: Element,
) -> Result<Input, InputError> {
    if count == 0 {
        return Err(InputError::NoArguments);
    }
    if count > max as usize {
        return Err(InputError::RangeTooSmall { count, max });
    }

    let values: Vec<Element> = sample(rng, max as usize, count)
        .into_iter()
        .map(|index| index as Element + 1)
        .collect();
    Ok(Input {
        tokens: values.iter().map(|v| v.to_string()).collect(),
        values,
    })
}
