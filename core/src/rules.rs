//! Free-text rule strings.
//!
//! A field's `rules` text such as `email() | min(3) | required()` is kept
//! verbatim on the definition. Only the required flag has behaviour today:
//! [`interpret`] reports it with a plain substring test. [`tokenize`] splits
//! the same text into named tokens for display; it never feeds back into
//! [`interpret`].

use serde::{Deserialize, Serialize};

/// Constraints derived from a rule string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConstraint {
    pub required: bool,
}

/// Derives the constraint set for a rule string.
///
/// `required` is a case-sensitive substring match anywhere in the text, so
/// `"notrequired"` also counts. Total and pure.
pub fn interpret(rules: &str) -> RuleConstraint {
    RuleConstraint {
        required: rules.contains("required"),
    }
}

/// One `name(args)` or bare `name` segment of a rule string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleToken {
    pub name: String,
    #[serde(default)]
    pub args: Vec<RuleArg>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleArg {
    Number(f64),
    Text(String),
}

/// Splits a rule string on `|` into tokens.
///
/// Empty segments are dropped. A segment without a balanced trailing `)`
/// becomes a bare token named after the whole segment.
pub fn tokenize(rules: &str) -> Vec<RuleToken> {
    rules
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> RuleToken {
    let call = segment
        .strip_suffix(')')
        .and_then(|head| head.split_once('('));

    match call {
        Some((name, args)) if !name.trim().is_empty() => RuleToken {
            name: name.trim().to_string(),
            args: args
                .split(',')
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .map(parse_arg)
                .collect(),
        },
        _ => RuleToken {
            name: segment.to_string(),
            args: Vec::new(),
        },
    }
}

fn parse_arg(arg: &str) -> RuleArg {
    match arg.parse::<f64>() {
        Ok(n) => RuleArg::Number(n),
        Err(_) => RuleArg::Text(arg.trim_matches(|c| c == '"' || c == '\'').to_string()),
    }
}
