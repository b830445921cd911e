//! Matching raw input against a list of choices.
//!
//! [`find_match`] walks the choices in declaration order and returns the
//! first one the input identifies under the selected [`MatchType`]:
//!
//! | Match type | Input identifies a choice when |
//! |------------|--------------------------------|
//! | `Exact` | it equals the choice name |
//! | `SubstringStart` | the choice name starts with it |
//! | `Substring` | it occurs anywhere in the choice name |
//! | `Fuzzy` | the choice name is the only fuzzy candidate among all names |
//!
//! With `ignore_case` every comparison folds case first.

use std::fmt;
use std::str::FromStr;

use crate::fuzzy;
use crate::question::Choice;

/// The rule used to decide whether input identifies a choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MatchType {
    /// Input equals the choice name.
    #[default]
    Exact,
    /// Choice name starts with the input.
    SubstringStart,
    /// Choice name contains the input.
    Substring,
    /// Input is a subsequence of exactly one choice name.
    Fuzzy,
}

impl MatchType {
    /// All match types, in declaration order.
    pub const ALL: [MatchType; 4] = [
        MatchType::Exact,
        MatchType::SubstringStart,
        MatchType::Substring,
        MatchType::Fuzzy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::SubstringStart => "substring-start",
            MatchType::Substring => "substring",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown match type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match type '{0}' (expected exact, substring-start, substring or fuzzy)")]
pub struct ParseMatchTypeError(String);

impl FromStr for MatchType {
    type Err = ParseMatchTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "exact" => Ok(MatchType::Exact),
            "substring-start" | "prefix" => Ok(MatchType::SubstringStart),
            "substring" => Ok(MatchType::Substring),
            "fuzzy" => Ok(MatchType::Fuzzy),
            _ => Err(ParseMatchTypeError(s.to_string())),
        }
    }
}

/// Find the first choice that `input` identifies.
///
/// Empty input never matches, not even a choice with an empty name.
/// Returns `None` when nothing matches; deciding what to do then is up to
/// the caller.
///
/// # Example
///
/// ```
/// use interview::{find_match, Choice, MatchType};
///
/// let choices = [Choice::new("apple", 1), Choice::new("raspberry", 2)];
///
/// let hit = find_match("rsp", &choices, MatchType::Fuzzy, false);
/// assert_eq!(hit.map(Choice::name), Some("raspberry"));
///
/// // "p" is a fuzzy candidate for both names, so it identifies neither.
/// assert!(find_match("p", &choices, MatchType::Fuzzy, false).is_none());
/// ```
pub fn find_match<'a, V>(
    input: &str,
    choices: &'a [Choice<V>],
    match_type: MatchType,
    ignore_case: bool,
) -> Option<&'a Choice<V>> {
    if input.is_empty() {
        return None;
    }

    match match_type {
        MatchType::Fuzzy => find_fuzzy(input, choices, ignore_case),
        _ => {
            let input = normalize(input, ignore_case);
            choices.iter().find(|choice| {
                let name = normalize(choice.name(), ignore_case);
                match match_type {
                    MatchType::Exact => name == input,
                    MatchType::SubstringStart => name.starts_with(input.as_str()),
                    _ => name.contains(input.as_str()),
                }
            })
        }
    }
}

fn find_fuzzy<'a, V>(
    input: &str,
    choices: &'a [Choice<V>],
    ignore_case: bool,
) -> Option<&'a Choice<V>> {
    let test = if ignore_case {
        fuzzy::matches_fold
    } else {
        fuzzy::matches
    };

    // Candidates are judged over the whole list at once; ambiguity is no match.
    let mut candidates = choices.iter().filter(|choice| test(input, choice.name()));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

fn normalize(s: &str, ignore_case: bool) -> String {
    if ignore_case {
        fuzzy::fold(s).collect()
    } else {
        s.to_string()
    }
}
