//! Case-conversion engine for export names.
//!
//! Raw design-tool names use `/`, `_`, `-`, and spaces
//! interchangeably as token separators: "ic/24/Icon" and "ic_24_icon"
//! are the same logical name. The functions here split a raw name on
//! those separators and re-join the tokens in the destination
//! platform's identifier convention. Both conversions are pure and
//! idempotent.

use serde::{Deserialize, Serialize};

/// Characters treated as token separators in raw asset names.
const SEPARATORS: &[char] = &['/', '_', '-', ' '];

/// Target identifier convention required by the destination
/// platform's source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    CamelCase,
    SnakeCase,
}

impl NameStyle {
    /// Convert `name` into this style.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::CamelCase => to_camel_case(name),
            Self::SnakeCase => to_snake_case(name),
        }
    }
}

/// Join separator-delimited tokens in lowerCamelCase.
///
/// The first token keeps its body but lowercases its first letter;
/// every later token gets its first letter uppercased. Empty tokens
/// (runs of separators) are dropped, so `ic_24_icon` and `ic/24/Icon`
/// both become `ic24Icon`.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let tokens = name.split(SEPARATORS).filter(|t| !t.is_empty());
    for (i, token) in tokens.enumerate() {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Join tokens with single underscores, lowercased.
///
/// camelCase humps inside a token are split as well, so
/// `primaryText` becomes `primary_text` and re-applying the
/// conversion is a no-op. Runs of separators collapse to one
/// underscore.
pub fn to_snake_case(name: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for token in name.split(SEPARATORS).filter(|t| !t.is_empty()) {
        let mut part = String::with_capacity(token.len());
        let mut prev_lower_or_digit = false;
        for ch in token.chars() {
            if ch.is_uppercase() && prev_lower_or_digit {
                part.push('_');
            }
            prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
            part.extend(ch.to_lowercase());
        }
        parts.push(part);
    }
    parts.join("_")
}
