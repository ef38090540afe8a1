//! Naming rule: optional validation pattern plus `$N` rewrite
//! template, compiled once at construction.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use assetforge_core::{Error, NameStyle};

/// Implicit pattern used when a rewrite template is configured
/// without a validation pattern: the whole raw name as group 1.
static FULL_MATCH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*)$").expect("valid regex"));

/// A compiled naming rule.
///
/// Both halves are optional. The validation pattern is compiled
/// eagerly so a syntax error in user configuration surfaces when the
/// processor is built, not midway through a batch.
#[derive(Debug, Clone, Default)]
pub struct NamingRule {
    validate: Option<Regex>,
    replace: Option<String>,
}

impl NamingRule {
    /// Rule with no validation and no rewrite.
    pub fn none() -> Self {
        Self::default()
    }

    /// Compile a rule from optional configuration strings.
    pub fn new(validate: Option<&str>, replace: Option<&str>) -> Result<Self, Error> {
        let validate = validate
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()?;
        Ok(Self {
            validate,
            replace: replace.map(str::to_string),
        })
    }

    /// Validate and rewrite a raw name.
    ///
    /// The rewrite template's `$1`..`$9` back-references resolve
    /// against the validation pattern's capture groups; a reference to
    /// a group the pattern does not define expands to nothing. Text
    /// outside the matched region survives the rewrite.
    pub fn apply(&self, raw: &str) -> Result<String, Error> {
        if let Some(pattern) = &self.validate {
            if !pattern.is_match(raw) {
                return Err(Error::InvalidName {
                    name: raw.to_string(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }
        let Some(template) = &self.replace else {
            return Ok(raw.to_string());
        };
        let pattern = self.validate.as_ref().unwrap_or(&FULL_MATCH);
        let rewritten = pattern.replace_all(raw, |caps: &Captures| expand_template(template, caps));
        Ok(rewritten.into_owned())
    }
}

/// Transform a raw name into its final export form: validate,
/// rewrite, then case-convert.
pub fn transform_name(raw: &str, rule: &NamingRule, style: NameStyle) -> Result<String, Error> {
    let renamed = rule.apply(raw)?;
    Ok(style.apply(&renamed))
}

/// Expand `$N` back-references in `template` from `caps`.
///
/// `$$` escapes a literal dollar sign; a `$` followed by anything
/// else is kept verbatim.
fn expand_template(template: &str, caps: &Captures) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some(&'$') => {
                chars.next();
                out.push('$');
            }
            Some(&d) if d.is_ascii_digit() => {
                chars.next();
                let idx = (d as u8 - b'0') as usize;
                if let Some(group) = caps.get(idx) {
                    out.push_str(group.as_str());
                }
            }
            _ => out.push('$'),
        }
    }
    out
}
